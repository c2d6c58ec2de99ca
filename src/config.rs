//! Export configuration for gridport

/// Which slice of the backing dataset an export visits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportRange {
    /// The entire backing dataset, `[0, row_count)`
    #[default]
    All,
    /// Only the currently displayed page, `[first, first + page_size)`
    PageOnly,
}

impl std::str::FromStr for ExportRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ExportRange::All),
            "page" | "page-only" => Ok(ExportRange::PageOnly),
            _ => Err(format!("Unknown export range: {}", s)),
        }
    }
}

/// Output format produced by the exporter sinks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Html,
    Terminal,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            "terminal" => Ok(OutputFormat::Terminal),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration accepted by the data-table export source
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Row range to visit
    pub range: ExportRange,
}

impl ExportOptions {
    /// Create options with the default range
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the export range
    pub fn with_range(mut self, range: ExportRange) -> Self {
        self.range = range;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_range_from_str() {
        assert_eq!("all".parse::<ExportRange>().unwrap(), ExportRange::All);
        assert_eq!("PAGE".parse::<ExportRange>().unwrap(), ExportRange::PageOnly);
        assert_eq!(
            "page-only".parse::<ExportRange>().unwrap(),
            ExportRange::PageOnly
        );
        assert!("rows".parse::<ExportRange>().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_default_options_export_everything() {
        let options = ExportOptions::new();
        assert_eq!(options.range, ExportRange::All);

        let options = options.with_range(ExportRange::PageOnly);
        assert_eq!(options.range, ExportRange::PageOnly);
    }
}
