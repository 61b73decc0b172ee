// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 50;
pub const FEEDBACK_DELAY_MS: u64 = 1500;

// Session constants
pub const ROUNDS_PER_SESSION: usize = 8;
pub const OPTIONS_PER_QUESTION: usize = 3;

// Arithmetic generation (addition is favoured slightly)
pub const ADDITION_PROBABILITY: f64 = 0.6;
pub const ADDEND_MAX: u32 = 5;
pub const SUBTRACTION_ANSWER_MAX: u32 = 5;
pub const SUBTRAHEND_MAX: u32 = 4;
pub const MATH_OPTION_MAX: u32 = 12;

// Counting generation
pub const COUNT_MAX: u32 = 8;
pub const COUNT_OPTION_MAX: u32 = 10;

// Distractor search is rejection sampling; this caps it.
pub const MAX_DISTRACTOR_ATTEMPTS: usize = 1000;

// Summary screen never draws more stars than this
pub const SUMMARY_STAR_CAP: u32 = 20;

// Config/log locations under the home directory
pub const DATA_DIR_NAME: &str = ".funlearn";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "funlearn.log";
pub const LOG_ENV_VAR: &str = "FUNLEARN_LOG";
