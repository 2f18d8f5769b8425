use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Anuncio de propiedad tal como se guarda en localStorage
/// Las claves usan camelCase para leer los datos escritos por la versión JS
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_viewed: Option<DateTime<Utc>>,
    /// Claves que este struct no declara (p. ej. `bedrooms`): se conservan al guardar
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl Listing {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            price: price.into(),
            image: None,
            last_modified: None,
            last_viewed: None,
            extra: Map::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// URL de la imagen, `None` si falta o está vacía
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Campos parciales para `update_listing`: solo se aplican los `Some`
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct ListingUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ListingUpdate {
    /// Update con los tres campos del formulario de edición
    pub fn from_form(title: String, location: String, price: String) -> Self {
        Self {
            title: Some(title),
            location: Some(location),
            price: Some(price),
            image: None,
        }
    }

    /// Mezcla los campos presentes sobre el anuncio (no toca id ni timestamps)
    pub fn apply_to(self, listing: &mut Listing) {
        if let Some(title) = self.title {
            listing.title = title;
        }
        if let Some(location) = self.location {
            listing.location = location;
        }
        if let Some(price) = self.price {
            listing.price = price;
        }
        if let Some(image) = self.image {
            listing.image = Some(image);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_js_shaped_listing() {
        let json = r#"{
            "id": "p1",
            "title": "Loft",
            "location": "Lyon",
            "price": "1200",
            "lastViewed": "2024-03-01T10:00:00.000Z"
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, "p1");
        assert!(listing.image.is_none());
        assert!(listing.last_modified.is_none());
        assert_eq!(
            listing.last_viewed.unwrap().to_rfc3339(),
            "2024-03-01T10:00:00+00:00"
        );
    }

    #[test]
    fn test_absent_optionals_are_not_serialized() {
        let json = serde_json::to_value(Listing::new("p1", "A", "X", "100")).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(!obj.contains_key("lastModified"));
    }

    #[test]
    fn test_update_merges_only_given_fields() {
        let mut listing = Listing::new("p1", "A", "X", "100").with_image("/a.png");
        let update = ListingUpdate {
            price: Some("150".into()),
            ..Default::default()
        };
        update.apply_to(&mut listing);
        assert_eq!(listing.title, "A");
        assert_eq!(listing.location, "X");
        assert_eq!(listing.price, "150");
        assert_eq!(listing.image.as_deref(), Some("/a.png"));
    }

    #[test]
    fn test_empty_image_has_no_url() {
        let listing = Listing::new("p1", "A", "X", "100").with_image("  ");
        assert_eq!(listing.image_url(), None);
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let json = r#"{"id":"p1","title":"A","location":"X","price":"1","bedrooms":3,"tags":["sea"]}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.extra.get("bedrooms"), Some(&Value::from(3)));
        assert!(!listing.extra.contains_key("title"));

        let back = serde_json::to_value(&listing).unwrap();
        assert_eq!(back["bedrooms"], 3);
        assert_eq!(back["tags"][0], "sea");
        assert_eq!(back.as_object().unwrap().len(), 6);
    }
}
