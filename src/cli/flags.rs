#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub clipboard: bool,
    pub no_symbols: bool,
    pub no_digits: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub unique_chars: bool,
    pub length: Option<usize>,
    pub max_symbols: Option<usize>,
    pub shuffles: Option<usize>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
}
