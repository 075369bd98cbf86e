/// Product name written into generated documents
pub const PRODUCT_NAME: &str = "calyx";

pub const PRODUCT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default `PRODID` value for documents produced by this library.
pub const PRODUCT_ID: &str =
    const_str::concat!("-//", PRODUCT_NAME, "//", PRODUCT_NAME, " ", PRODUCT_VERSION, "//EN");

/// Prefix for environment variables read by [`crate::config::load_config`].
pub const ENV_PREFIX: &str = "CALYX";

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = PRODUCT_NAME;
