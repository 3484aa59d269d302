//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::error::StackscoutError;
use crate::platform::Platform;

/// Common arguments shared by the directory-scanning commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Directory to inspect (defaults to current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "STACKSCOUT_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Target platform override
#[derive(Args, Debug, Clone)]
pub struct PlatformArgs {
    /// Target platform (windows, macos, linux); defaults to the host
    #[arg(long, env = "STACKSCOUT_PLATFORM")]
    pub platform: Option<String>,
}

impl CommonArgs {
    /// Get the path, using current directory if none provided
    pub fn get_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

impl PlatformArgs {
    /// The requested platform, or the host when none was given
    pub fn resolve(&self) -> Result<Platform, StackscoutError> {
        match self.platform.as_deref() {
            None => Ok(Platform::current()),
            Some(name) => Platform::parse(name).ok_or_else(|| StackscoutError::ConfigurationError {
                message: format!("Unknown platform '{name}' (expected windows, macos or linux)"),
            }),
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, StackscoutError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, StackscoutError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::StackscoutError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Generates a `with_*` builder whose `build` fails on any unset field
///
/// ```ignore
/// impl_builder! {
///     ToolCheckConfigBuilder => ToolCheckConfig {
///         ecosystem: Ecosystem => with_ecosystem,
///         timeout: Duration => with_timeout,
///     }
/// }
/// ```
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $config:ident { $($field:ident: $ty:ty => $setter:ident),* $(,)? }) => {
        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::StackscoutError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::StackscoutError::ConfigurationError {
                                message: concat!("Missing required field: ", stringify!($field))
                                    .to_string(),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}
