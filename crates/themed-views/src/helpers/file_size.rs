//! Human-readable file sizes.

use serde::Deserialize;

const SI_NARROW: [&str; 9] = ["", "k", "M", "G", "T", "P", "E", "Z", "Y"];
const SI_WIDE: [&str; 9] = [
    "", "kilo", "mega", "giga", "tera", "peta", "exa", "zetta", "yotta",
];
const IEC_NARROW: [&str; 9] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"];
const IEC_WIDE: [&str; 9] = [
    "", "kibi", "mebi", "gibi", "tebi", "pebi", "exbi", "zebi", "yobi",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeUnit {
    #[default]
    Byte,
    Bit,
}

impl SizeUnit {
    /// `bit`, `bits` and `b` mean bits; anything else means bytes.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "bit" | "bits" | "b" => Self::Bit,
            _ => Self::Byte,
        }
    }

    fn label(self, plural: bool, width: Width) -> &'static str {
        match (self, plural, width) {
            (Self::Byte, _, Width::Narrow) => "B",
            (Self::Byte, false, Width::Wide) => "byte",
            (Self::Byte, true, Width::Wide) => "bytes",
            (Self::Bit, false, _) => "bit",
            (Self::Bit, true, _) => "bits",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Standard {
    /// Powers of 1000.
    #[default]
    Si,
    /// Powers of 1024.
    Iec,
}

impl Standard {
    /// `iec` or `i` select IEC; anything else is SI.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "iec" | "i" => Self::Iec,
            _ => Self::Si,
        }
    }

    fn factor(self) -> f64 {
        match self {
            Self::Si => 1000.0,
            Self::Iec => 1024.0,
        }
    }

    fn prefixes(self, width: Width) -> &'static [&'static str; 9] {
        match (self, width) {
            (Self::Si, Width::Narrow) => &SI_NARROW,
            (Self::Si, Width::Wide) => &SI_WIDE,
            (Self::Iec, Width::Narrow) => &IEC_NARROW,
            (Self::Iec, Width::Wide) => &IEC_WIDE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    #[default]
    Narrow,
    Wide,
}

impl Width {
    /// `wide` or `w` select long names; anything else is narrow.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "wide" | "w" => Self::Wide,
            _ => Self::Narrow,
        }
    }
}

/// Formatting options, deserializable from a Tera keyword-argument map.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileSizeOptions {
    pub unit: String,
    pub standard: String,
    pub width: String,
    /// Separator between the number and the unit.
    pub prefix: String,
    pub decimals: usize,
    pub dec_point: String,
    pub thousands_sep: String,
}

impl Default for FileSizeOptions {
    fn default() -> Self {
        Self {
            unit: "byte".to_string(),
            standard: "si".to_string(),
            width: "narrow".to_string(),
            prefix: " ".to_string(),
            decimals: 2,
            dec_point: ".".to_string(),
            thousands_sep: ",".to_string(),
        }
    }
}

/// Format `file_size` bytes, e.g. `1.50 MB` or `1.00 kibibyte`.
pub fn file_size_format(file_size: f64, options: &FileSizeOptions) -> String {
    let unit = SizeUnit::parse(&options.unit);
    let standard = Standard::parse(&options.standard);
    let width = Width::parse(&options.width);

    let mut size = match unit {
        SizeUnit::Bit => file_size * 8.0,
        SizeUnit::Byte => file_size,
    };
    let prefixes = standard.prefixes(width);
    let mut i = 0;
    while size > standard.factor() && i < prefixes.len() - 1 {
        size /= standard.factor();
        i += 1;
    }

    let number = number_format(
        size,
        options.decimals,
        &options.dec_point,
        &options.thousands_sep,
    );
    let rounded = format!("{:.*}", options.decimals, size)
        .parse::<f64>()
        .unwrap_or(size);
    let plural = !(rounded == 0.0 || rounded == 1.0);

    format!(
        "{number}{}{}{}",
        options.prefix,
        prefixes[i],
        unit.label(plural, width)
    )
}

/// Round to `decimals` places and group thousands.
pub fn number_format(value: f64, decimals: usize, dec_point: &str, thousands_sep: &str) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push_str(thousands_sep);
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push_str(dec_point);
        out.push_str(frac);
    }
    out
}
