use serde::ser::SerializeMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Smallest custom page edge accepted, in points.
pub const MIN_PAGE_DIMENSION_PT: f32 = 1.0;

/// A fixed output page size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Width and height in PDF points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// A custom size; both edges must be finite and at least
    /// [`MIN_PAGE_DIMENSION_PT`].
    pub fn custom(width: f32, height: f32) -> Result<Self, String> {
        let usable = |v: f32| v.is_finite() && v >= MIN_PAGE_DIMENSION_PT;
        if !usable(width) || !usable(height) {
            return Err(format!(
                "Page dimensions must be at least {}pt, got {}x{}",
                MIN_PAGE_DIMENSION_PT, width, height
            ));
        }
        Ok(PageSize::Custom { width, height })
    }

    /// Checks a size built directly rather than through [`custom`](Self::custom).
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            PageSize::Custom { width, height } => Self::custom(width, height).map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => {
                Self::custom(width, height).map_err(de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_custom_sizes_deserialize() {
        let a4: PageSize = serde_json::from_str(r#""a4""#).unwrap();
        assert_eq!(a4, PageSize::A4);
        let custom: PageSize = serde_json::from_str(r#"{"width": 300, "height": 400}"#).unwrap();
        assert_eq!(custom.dimensions_pt(), (300.0, 400.0));
        assert!(serde_json::from_str::<PageSize>(r#""tabloid""#).is_err());
        assert!(serde_json::from_str::<PageSize>(r#"{"width": 0, "height": 400}"#).is_err());
    }

    #[test]
    fn vanishing_custom_pages_are_rejected() {
        assert!(serde_json::from_str::<PageSize>(r#"{"width": 595, "height": 1e-30}"#).is_err());
        assert!(serde_json::from_str::<PageSize>(r#"{"width": 0.5, "height": 400}"#).is_err());
        assert!(PageSize::custom(595.0, f32::NAN).is_err());
        assert!(PageSize::custom(1.0, 1.0).is_ok());
        assert!(PageSize::Custom { width: 595.0, height: 0.0 }.validate().is_err());
        assert!(PageSize::A4.validate().is_ok());
    }
}
