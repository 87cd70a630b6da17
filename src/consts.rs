/// Maximum valid day of month (inclusive)
pub const MAX_DAY: u8 = 31;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Separator between day and month in date text (`DD/MM`)
pub const DATE_SEPARATOR: char = '/';

/// Maximum file index that still renders in four digits
pub const MAX_FILE_INDEX: u16 = 9999;

/// Extension of in-progress capture files
pub const DATA_FILE_EXT: &str = "tmp";

/// Full scale of the logger's 12-bit ADC
pub const ADC_MAX_12BIT: u16 = 4095;

/// ADC reference voltage of the lab rig
pub const DEFAULT_VREF: f32 = 3.3;

/// SD chip-select pin on the lab rig (Adalogger wiring)
pub const DEFAULT_CHIP_SELECT: u8 = 4;

pub const MICROS_PER_SEC: u64 = 1_000_000;
pub const MICROS_PER_MILLI: u64 = 1_000;

/// Shortest accepted sampling period (1 ms)
pub const MIN_INTERVAL_US: u64 = MICROS_PER_MILLI;

/// Longest accepted sampling period (1 hour)
pub const MAX_INTERVAL_US: u64 = 3_600 * MICROS_PER_SEC;

/// Default sampling period (1 s)
pub(crate) const DEFAULT_INTERVAL_US: u64 = MICROS_PER_SEC;
