use anyhow::{bail, Result};
use csv::StringRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Sex,
    Lat,
    Long,
    Region,
    Country,
    MtHaplogroup,
    YHaplogroup,
    Date,
    Period,
    Score,
}

impl Field {
    const ALL: [Field; 10] = [
        Field::Sex,
        Field::Lat,
        Field::Long,
        Field::Region,
        Field::Country,
        Field::MtHaplogroup,
        Field::YHaplogroup,
        Field::Date,
        Field::Period,
        Field::Score,
    ];

    /// Exact header names, compared after `normalize`.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::Sex => &["sex", "molecular sex"],
            Field::Lat => &["lat", "lat.", "latitude"],
            Field::Long => &["long", "long.", "lon", "longitude"],
            Field::Region => &["region", "continente", "continent"],
            Field::Country => &["country", "political entity"],
            Field::MtHaplogroup => &["mtdna", "mt_haplogroup", "mtdna haplogroup"],
            Field::YHaplogroup => &[
                "ydna",
                "y_haplogroup",
                "y haplogroup in isogg v15.73 notation (automatically called)",
            ],
            Field::Date => &["date", "date_bp"],
            Field::Period => &["period", "historical period", "período histórico"],
            Field::Score => &["score", "prs_scz", "prs_normalizado", "prs"],
        }
    }

    /// Looser match for the long AADR headers whose wording drifts between releases.
    fn prefix(&self) -> Option<&'static str> {
        match self {
            Field::MtHaplogroup => Some("mtdna haplogroup"),
            Field::YHaplogroup => Some("y haplogroup"),
            Field::Date => Some("date mean in bp"),
            _ => None,
        }
    }

    /// Preferred among several prefix matches. AADR carries both a terminal-mutation and
    /// an ISOGG Y call; the ISOGG one is the haplogroup label.
    fn prefers(&self, header: &str) -> bool {
        match self {
            Field::YHaplogroup => header.starts_with("y haplogroup") && header.contains("isogg"),
            _ => false,
        }
    }

    fn is_required(&self) -> bool {
        matches!(
            self,
            Field::Sex | Field::Lat | Field::Long | Field::Country | Field::Date
        )
    }

    fn describe(&self) -> &'static str {
        self.aliases()[0]
    }
}

fn normalize(header: &str) -> String {
    header
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Column index of each recognized field in a header row.
#[derive(Debug, Clone, Default)]
pub(crate) struct ColumnMap {
    indices: [Option<usize>; 10],
}

impl ColumnMap {
    pub(crate) fn from_headers(headers: &StringRecord) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize).collect();
        let mut map = ColumnMap::default();

        for (slot, field) in Field::ALL.iter().enumerate() {
            let exact = normalized
                .iter()
                .position(|h| field.aliases().contains(&h.as_str()));
            let found = exact
                .or_else(|| normalized.iter().position(|h| field.prefers(h)))
                .or_else(|| {
                    field
                        .prefix()
                        .and_then(|p| normalized.iter().position(|h| h.starts_with(p)))
                });
            map.indices[slot] = found;
        }

        let missing: Vec<&str> = Field::ALL
            .iter()
            .filter(|f| f.is_required() && map.index(**f).is_none())
            .map(|f| f.describe())
            .collect();
        if !missing.is_empty() {
            bail!("Dataset is missing required column(s): {}", missing.join(", "));
        }
        if map.index(Field::MtHaplogroup).is_none() && map.index(Field::YHaplogroup).is_none() {
            bail!("Dataset has no mtDNA or Y-chromosome haplogroup column");
        }
        Ok(map)
    }

    pub(crate) fn index(&self, field: Field) -> Option<usize> {
        let slot = Field::ALL.iter().position(|f| *f == field)?;
        self.indices[slot]
    }

    pub(crate) fn get<'r>(&self, record: &'r StringRecord, field: Field) -> Option<&'r str> {
        self.index(field).and_then(|i| record.get(i))
    }
}
