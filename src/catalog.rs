use serde::Deserialize;

/// One dish on the menu. Never mutated after the config is loaded.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub ingredients: String,
    pub price: f64,
    #[serde(rename = "photoName")]
    pub photo: String,
    #[serde(default)]
    pub sold_out: bool,
}

/// Ordered list of menu items; insertion order is display order.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|it| it.name == name)
    }
}

impl From<Vec<MenuItem>> for Catalog {
    fn from(items: Vec<MenuItem>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
