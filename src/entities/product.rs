use crate::entities::Record;
use crate::traits::{Entity, FormError, FormModel};
use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
}

impl Product {
    /// Case-insensitive match on name or category. Empty queries match all.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
    }
}

impl Entity for Product {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Product {
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Text buffers behind the product form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub category: String,
    pub stock: String,
}

impl FormModel for Product {
    type Draft = ProductDraft;

    fn to_draft(item: Option<&Self>) -> ProductDraft {
        match item {
            Some(p) => ProductDraft {
                name: p.name.clone(),
                price: p.price.to_string(),
                category: p.category.clone(),
                stock: p.stock.to_string(),
            },
            None => ProductDraft::default(),
        }
    }

    fn from_draft(draft: &ProductDraft, original: Option<&Self>) -> Result<Self, FormError> {
        let name = required("Product Name", &draft.name)?;
        let price = required("Price", &draft.price)?;
        let price: f64 = price
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| FormError::InvalidNumber {
                field: "Price",
                value: price.to_string(),
            })?;
        let category = required("Category", &draft.category)?;
        let stock = required("Stock", &draft.stock)?;
        let stock: u32 = stock.parse().map_err(|_| FormError::InvalidNumber {
            field: "Stock",
            value: stock.to_string(),
        })?;

        Ok(Product {
            id: original.map(|p| p.id).unwrap_or(0),
            name: name.to_string(),
            price,
            category: category.to_string(),
            stock,
        })
    }
}

pub(crate) fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Required { field })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product {
            id: 4,
            name: "Laptop".to_string(),
            price: 999.5,
            category: "Electronics".to_string(),
            stock: 3,
        }
    }

    #[test]
    fn test_draft_round_trip_keeps_id() {
        let original = laptop();
        let mut draft = Product::to_draft(Some(&original));
        draft.stock = "7".to_string();

        let edited = Product::from_draft(&draft, Some(&original)).unwrap();
        assert_eq!(edited.id, 4);
        assert_eq!(edited.stock, 7);
        assert_eq!(edited.price, 999.5);
    }

    #[test]
    fn test_create_draft_is_empty() {
        assert_eq!(Product::to_draft(None), ProductDraft::default());
    }

    #[test]
    fn test_validation_errors() {
        let mut draft = Product::to_draft(Some(&laptop()));
        draft.name = "   ".to_string();
        assert_eq!(
            Product::from_draft(&draft, None),
            Err(FormError::Required { field: "Product Name" })
        );

        let mut draft = Product::to_draft(Some(&laptop()));
        draft.price = "cheap".to_string();
        assert_eq!(
            Product::from_draft(&draft, None),
            Err(FormError::InvalidNumber {
                field: "Price",
                value: "cheap".to_string()
            })
        );

        let mut draft = Product::to_draft(Some(&laptop()));
        draft.stock = "-1".to_string();
        assert!(matches!(
            Product::from_draft(&draft, None),
            Err(FormError::InvalidNumber { field: "Stock", .. })
        ));
    }

    #[test]
    fn test_matches_search() {
        let p = laptop();
        assert!(p.matches_search(""));
        assert!(p.matches_search("LAP"));
        assert!(p.matches_search("electro"));
        assert!(!p.matches_search("clothing"));
    }
}
