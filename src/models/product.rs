use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use super::Category;

/// Upper bound of the price filter when the shopper has not narrowed it.
pub const DEFAULT_MAX_PRICE: u64 = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub price: f64,
    /// Units in stock.
    #[serde(default)]
    pub quantity: u32,
    pub category: CategoryRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Products reference their category either by id or as a populated document,
/// depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(String),
    Populated(Category),
}

impl CategoryRef {
    pub fn id(&self) -> &str {
        match self {
            CategoryRef::Id(id) => id,
            CategoryRef::Populated(category) => &category.id,
        }
    }
}

/// Body of `POST /product/filter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductFilter {
    /// Selected category ids; empty means every category.
    pub category: Vec<String>,
    /// Inclusive `[min, max]` price range.
    pub price: [u64; 2],
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: Vec::new(),
            price: [0, DEFAULT_MAX_PRICE],
        }
    }
}

impl ProductFilter {
    /// Adds the category if absent, removes it otherwise.
    pub fn toggle_category(&mut self, category_id: &str) {
        match self.category.iter().position(|c| c == category_id) {
            Some(index) => {
                self.category.remove(index);
            }
            None => self.category.push(category_id.to_string()),
        }
    }

    pub fn is_selected(&self, category_id: &str) -> bool {
        self.category.iter().any(|c| c == category_id)
    }
}

/// An image attached to a product form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Admin product form, kept as entered text until submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub desc: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
    pub photo: Option<Photo>,
}

impl ProductForm {
    /// Pre-fills the form from an existing product. The photo is left empty so an
    /// update keeps the current image unless a new one is chosen.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            desc: product.desc.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            category: product.category.id().to_string(),
            photo: None,
        }
    }

    /// Required-field and numeric checks done before anything is sent.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("name", &self.name),
            ("description", &self.desc),
            ("price", &self.price),
            ("quantity", &self.quantity),
            ("category", &self.category),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(format!("Missing required fields: {}", missing.join(", ")));
        }

        match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => {}
            _ => return Err(format!("Invalid price '{}'", self.price)),
        }
        if self.quantity.trim().parse::<u32>().is_err() {
            return Err(format!("Invalid quantity '{}'", self.quantity));
        }
        Ok(())
    }

    /// Multipart body for create/update. Empty fields are left out.
    pub fn to_multipart(&self) -> Result<Form, reqwest::Error> {
        let mut form = Form::new();
        for (key, value) in [
            ("name", &self.name),
            ("desc", &self.desc),
            ("price", &self.price),
            ("quantity", &self.quantity),
            ("category", &self.category),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                form = form.text(key, value.to_string());
            }
        }
        if let Some(photo) = &self.photo {
            let part = Part::bytes(photo.bytes.clone())
                .file_name(photo.file_name.clone())
                .mime_str(&photo.content_type)?;
            form = form.part("photo", part);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "Lamp".into(),
            desc: "Warm light".into(),
            price: "49.5".into(),
            quantity: "3".into(),
            category: "cat-1".into(),
            photo: None,
        }
    }

    #[test]
    fn test_category_ref_accepts_both_shapes() {
        let by_id: Product = serde_json::from_value(json!({
            "_id": "p1", "name": "Lamp", "desc": "", "price": 10, "quantity": 0,
            "category": "cat-1"
        }))
        .unwrap();
        assert_eq!(by_id.category.id(), "cat-1");
        assert!(!by_id.in_stock());

        let populated: Product = serde_json::from_value(json!({
            "_id": "p2", "name": "Desk", "desc": "Oak", "price": 120.5, "quantity": 2,
            "category": {"_id": "cat-2", "name": "Furniture"}
        }))
        .unwrap();
        assert_eq!(populated.category.id(), "cat-2");
        assert!(populated.in_stock());
    }

    #[test]
    fn test_filter_toggle_and_wire_shape() {
        let mut filter = ProductFilter::default();
        filter.toggle_category("a");
        filter.toggle_category("b");
        filter.toggle_category("a");

        assert!(filter.is_selected("b"));
        assert!(!filter.is_selected("a"));
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({"category": ["b"], "price": [0, 100000]})
        );
    }

    #[test]
    fn test_form_validation() {
        assert!(filled_form().validate().is_ok());

        let mut form = filled_form();
        form.name = "  ".into();
        form.category.clear();
        let err = form.validate().unwrap_err();
        assert!(err.contains("name"));
        assert!(err.contains("category"));

        let mut form = filled_form();
        form.price = "cheap".into();
        assert!(form.validate().is_err());

        let mut form = filled_form();
        form.quantity = "-1".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_form_prefill_from_product() {
        let product = Product {
            id: "p1".into(),
            name: "Desk".into(),
            desc: "Oak".into(),
            price: 120.5,
            quantity: 2,
            category: CategoryRef::Populated(Category {
                id: "cat-2".into(),
                name: "Furniture".into(),
            }),
            availability: None,
        };
        let form = ProductForm::from_product(&product);
        assert_eq!(form.price, "120.5");
        assert_eq!(form.quantity, "2");
        assert_eq!(form.category, "cat-2");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_photo_with_bad_mime_is_rejected() {
        let mut form = filled_form();
        form.photo = Some(Photo {
            file_name: "lamp.png".into(),
            content_type: "not a mime".into(),
            bytes: vec![1, 2, 3],
        });
        assert!(form.to_multipart().is_err());

        form.photo.as_mut().unwrap().content_type = "image/png".into();
        assert!(form.to_multipart().is_ok());
    }
}
