use crate::types::{PaperFormat, PaperSize};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A paper size defined by a printer driver
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedPaperSize {
    pub name: String,
    pub size: PaperSize,
}

/// Printer-specific paper sizes, consulted before the standard formats
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrinterContext {
    pub printer_name: Option<String>,
    pub paper_sizes: Vec<NamedPaperSize>,
}

impl PrinterContext {
    pub fn new(printer_name: impl Into<String>) -> Self {
        Self {
            printer_name: Some(printer_name.into()),
            paper_sizes: Vec::new(),
        }
    }

    pub fn with_paper_size(mut self, name: impl Into<String>, size: PaperSize) -> Self {
        self.paper_sizes.push(NamedPaperSize {
            name: name.into(),
            size,
        });
        self
    }

    pub fn find(&self, name: &str) -> Option<PaperSize> {
        let name = name.trim();
        self.paper_sizes
            .iter()
            .find(|paper| paper.name.eq_ignore_ascii_case(name))
            .map(|paper| paper.size)
    }
}

/// Resolves paper format names to physical paper sizes
pub trait PaperSizeLookup {
    /// Paper size for `format`, or `None` if the format is unknown
    fn paper_size(&self, format: &str, printer: &PrinterContext) -> Option<PaperSize>;
}

impl<F> PaperSizeLookup for F
where
    F: Fn(&str, &PrinterContext) -> Option<PaperSize>,
{
    fn paper_size(&self, format: &str, printer: &PrinterContext) -> Option<PaperSize> {
        self(format, printer)
    }
}

/// Printer paper sizes first, then the built-in [`PaperFormat`] table
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPaperSizes;

impl PaperSizeLookup for StandardPaperSizes {
    fn paper_size(&self, format: &str, printer: &PrinterContext) -> Option<PaperSize> {
        let size = printer
            .find(format)
            .or_else(|| format.parse::<PaperFormat>().ok().map(PaperFormat::paper_size))?;

        if size.is_degenerate() {
            log::warn!("Paper format '{}' has degenerate size {:?}", format, size);
            return None;
        }
        Some(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sizes() {
        let printer = PrinterContext::default();
        assert_eq!(
            StandardPaperSizes.paper_size("Letter", &printer),
            Some(PaperSize::new(850.0, 1100.0))
        );
        assert_eq!(
            StandardPaperSizes.paper_size("a4", &printer),
            Some(PaperSize::new(827.0, 1169.0))
        );
        assert_eq!(StandardPaperSizes.paper_size("B5", &printer), None);
    }

    #[test]
    fn test_printer_sizes_take_precedence() {
        let printer = PrinterContext::new("Plotter")
            .with_paper_size("Letter", PaperSize::new(800.0, 1050.0))
            .with_paper_size("Roll 36in", PaperSize::new(3600.0, 10_000.0));

        assert_eq!(
            StandardPaperSizes.paper_size("letter", &printer),
            Some(PaperSize::new(800.0, 1050.0))
        );
        assert_eq!(
            StandardPaperSizes.paper_size("Roll 36in", &printer),
            Some(PaperSize::new(3600.0, 10_000.0))
        );
        assert_eq!(
            StandardPaperSizes.paper_size("A3", &printer),
            Some(PaperFormat::A3.paper_size())
        );
    }

    #[test]
    fn test_degenerate_printer_size_is_unknown() {
        let printer = PrinterContext::default().with_paper_size("Broken", PaperSize::new(0.0, 0.0));
        assert_eq!(StandardPaperSizes.paper_size("Broken", &printer), None);
    }
}
