pub const APP_TITLE: &str = "FOLIO TERMINAL";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_POLL_RATE: u64 = 16;
pub const MIN_POLL_RATE: u64 = 16;
pub const MAX_POLL_RATE: u64 = 1000;
pub const DOUBLE_ESC_THRESHOLD: u64 = 250;
pub const DEFAULT_INPUT_MAX_LENGTH: usize = 100;

// Typewriter timings (ms per tick)
pub const DEFAULT_TYPEWRITER_DELAY: u64 = 10;
pub const DEFAULT_PARAGRAPH_DELAY: u64 = 1;
pub const DEFAULT_ART_DELAY: u64 = 1;
pub const MAX_TYPEWRITER_DELAY: u64 = 2000;
pub const ART_CHUNK_SIZE: usize = 20;

// Loading bar: base delay plus one ms per N stripped characters
pub const DEFAULT_LOADING_BASE_DELAY: u64 = 20;
pub const COMMAND_LOADING_DIVISOR: usize = 8;
pub const INTRO_LOADING_DIVISOR: usize = 4;

pub const DEFAULT_ICON_INTERVAL: u64 = 500;
pub const DEFAULT_RAIN_INTERVAL: u64 = 35;
pub const MIN_RAIN_INTERVAL: u64 = 10;
pub const RAIN_RESET_THRESHOLD: f64 = 0.975;
pub const RAIN_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ123456789@#$%^&*()*&^%+-/~{[|`]}";

pub const DEFAULT_PROMPT: &str = "C:\\Users\\Client > ";

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_ERROR: u16 = 500;

// Terminal info panel
pub const INFO_COMMAND_MAX: usize = 20;
pub const INFO_LINE_WIDTH: usize = 35;

pub const CONFIG_DIR: &str = ".folio";
pub const CONFIG_FILE: &str = "folio.toml";
pub const LOG_FILE: &str = "folio.log";
