mod builder;
mod record;
#[cfg(test)]
mod tests;

pub use builder::CaptureConfigurationBuilder;
pub use record::CaptureConfiguration;
