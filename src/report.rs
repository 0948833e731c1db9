//! Plain-text SAN domain report.
//!
//! Everything written here goes to the primary output stream, without
//! timestamps, so it can be piped or diffed between runs.

use std::io::Write;

use crate::types::DistributionId;

/// Writes the report and owns the running domain total
pub struct Reporter<W: Write> {
    out: W,
    total_domains: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            total_domains: 0,
        }
    }

    /// Discovery matched nothing
    pub fn no_resources(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "No resources found with the specified tag.")
    }

    /// Report one distribution and add its aliases to the total
    pub fn distribution(&mut self, id: &DistributionId, aliases: &[String]) -> std::io::Result<()> {
        if aliases.is_empty() {
            writeln!(self.out, "Distribution ID: {} has no SAN domains.", id)?;
            return writeln!(self.out);
        }

        writeln!(self.out, "Distribution ID: {}", id)?;
        writeln!(self.out, "SAN domains:")?;
        for alias in aliases {
            writeln!(self.out, " - {}", alias)?;
        }
        writeln!(self.out)?;

        self.total_domains += aliases.len();
        Ok(())
    }

    #[cfg(test)]
    fn total_domains(&self) -> usize {
        self.total_domains
    }

    /// Write the summary line and return the final total
    pub fn finish(mut self) -> std::io::Result<usize> {
        writeln!(self.out, "Total SAN domains found: {}", self.total_domains)?;
        self.out.flush()?;
        Ok(self.total_domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Reporter<&mut Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(&mut buf);
        f(&mut reporter);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_distribution_with_domains() {
        let out = render(|r| {
            r.distribution(
                &DistributionId::new("E123"),
                &["a.example.com".to_string(), "b.example.com".to_string()],
            )
            .unwrap();
            assert_eq!(r.total_domains(), 2);
        });

        assert_eq!(
            out,
            "Distribution ID: E123\nSAN domains:\n - a.example.com\n - b.example.com\n\n"
        );
    }

    #[test]
    fn test_distribution_without_domains() {
        let out = render(|r| {
            r.distribution(&DistributionId::new("E456"), &[]).unwrap();
            assert_eq!(r.total_domains(), 0);
        });

        assert_eq!(out, "Distribution ID: E456 has no SAN domains.\n\n");
    }

    #[test]
    fn test_finish_prints_total() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(&mut buf);
        reporter
            .distribution(&DistributionId::new("E1"), &["x.example.com".to_string()])
            .unwrap();
        reporter.distribution(&DistributionId::new("E2"), &[]).unwrap();
        let total = reporter.finish().unwrap();

        assert_eq!(total, 1);
        let out = String::from_utf8(buf).unwrap();
        assert!(out.ends_with("\nTotal SAN domains found: 1\n"));
    }

    #[test]
    fn test_no_resources_message() {
        let out = render(|r| r.no_resources().unwrap());
        assert_eq!(out, "No resources found with the specified tag.\n");
    }
}
