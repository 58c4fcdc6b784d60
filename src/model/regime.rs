use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Presentation category of a regime in the comparison charts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// The regime with the lowest total tax
    Lowest,
    /// Every other regime
    Others,
}

impl Highlight {
    pub fn label(&self) -> &'static str {
        match self {
            Highlight::Lowest => "Menor Imposto",
            Highlight::Others => "Outros Regimes",
        }
    }

    /// Bar colour used for this category
    pub fn color(&self) -> &'static str {
        match self {
            Highlight::Lowest => "#28a745",
            Highlight::Others => "#007bff",
        }
    }
}

/// One tax regime being compared
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeRecord {
    /// Display name, used as the x-axis category
    pub name: String,
    /// Total tax owed under this regime
    pub tax_value: Decimal,
    /// Tax as a fraction of revenue (0.1682 = 16.82%)
    pub effective_rate: Decimal,
    pub highlight: Highlight,
}

impl RegimeRecord {
    pub fn is_min_tax(&self) -> bool {
        self.highlight == Highlight::Lowest
    }
}

/// Ordered collection of regimes; order is the chart x-axis order
#[derive(Debug, Clone, Default)]
pub struct RegimeTable {
    records: Vec<RegimeRecord>,
}

impl RegimeTable {
    /// The fixed dataset presented in the report
    pub fn reference() -> Self {
        Self::from_rows([
            ("Simples Nacional Atual", dec!(15043.17), dec!(0.112968)),
            ("Simples Nacional RTC DAS", dec!(42058.26), dec!(0.1682)),
            ("Simples Nacional RTC Híbrido", dec!(68672.45), dec!(0.274635)),
            ("Lucro Presumido", dec!(103422.83), dec!(0.413610)),
        ])
    }

    /// Build a table from `(name, tax_value, effective_rate)` rows.
    ///
    /// The first row holding the minimum tax value is marked
    /// [`Highlight::Lowest`]; later rows with the same value stay
    /// [`Highlight::Others`].
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal, Decimal)>,
        S: Into<String>,
    {
        let mut records: Vec<RegimeRecord> = rows
            .into_iter()
            .map(|(name, tax_value, effective_rate)| RegimeRecord {
                name: name.into(),
                tax_value,
                effective_rate,
                highlight: Highlight::Others,
            })
            .collect();

        let lowest = records
            .iter()
            .enumerate()
            .fold(None::<(usize, Decimal)>, |best, (i, r)| match best {
                Some((_, min)) if min <= r.tax_value => best,
                _ => Some((i, r.tax_value)),
            });

        if let Some((index, _)) = lowest {
            records[index].highlight = Highlight::Lowest;
        }

        Self { records }
    }

    pub fn records(&self) -> &[RegimeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record marked as lowest tax, if any
    pub fn lowest(&self) -> Option<&RegimeRecord> {
        self.records.iter().find(|r| r.is_min_tax())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_has_single_lowest() {
        let table = RegimeTable::reference();
        assert_eq!(table.len(), 4);

        let marked: Vec<_> = table.records().iter().filter(|r| r.is_min_tax()).collect();
        assert_eq!(marked.len(), 1);

        let argmin = table.records().iter().min_by_key(|r| r.tax_value).unwrap();
        assert_eq!(marked[0], argmin);
        assert_eq!(marked[0].tax_value, dec!(15043.17));
    }

    #[test]
    fn test_reference_keeps_dataset_order() {
        let table = RegimeTable::reference();
        let names: Vec<_> = table.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Simples Nacional Atual",
                "Simples Nacional RTC DAS",
                "Simples Nacional RTC Híbrido",
                "Lucro Presumido",
            ]
        );
    }

    #[test]
    fn test_tie_marks_first_minimum_only() {
        let table = RegimeTable::from_rows([
            ("A", dec!(20), dec!(0.2)),
            ("B", dec!(10), dec!(0.1)),
            ("C", dec!(10), dec!(0.1)),
        ]);
        let flags: Vec<_> = table.records().iter().map(|r| r.is_min_tax()).collect();
        assert_eq!(flags, [false, true, false]);
        assert_eq!(table.lowest().map(|r| r.name.as_str()), Some("B"));
    }

    #[test]
    fn test_lowest_not_first_row() {
        let table = RegimeTable::from_rows([("A", dec!(5), dec!(0.5)), ("B", dec!(1), dec!(0.1))]);
        assert_eq!(table.lowest().map(|r| r.name.as_str()), Some("B"));
        assert_eq!(table.records()[0].highlight, Highlight::Others);
    }

    #[test]
    fn test_empty_table_has_no_lowest() {
        let table = RegimeTable::from_rows(Vec::<(String, Decimal, Decimal)>::new());
        assert!(table.is_empty());
        assert!(table.lowest().is_none());
    }
}
