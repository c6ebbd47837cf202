use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Component categories a computer build is made of.
///
/// Declaration order is the canonical order used for validation, stock
/// checks and receipts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Processor,
    Ram,
    Storage,
    Screen,
    CaseType,
    UsbPorts,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Processor,
        Category::Ram,
        Category::Storage,
        Category::Screen,
        Category::CaseType,
        Category::UsbPorts,
    ];

    /// Key used in catalogs and serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Processor => "processor",
            Category::Ram => "ram",
            Category::Storage => "storage",
            Category::Screen => "screen",
            Category::CaseType => "caseType",
            Category::UsbPorts => "usbPorts",
        }
    }

    /// Heading printed on receipts
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Processor => "Processor",
            Category::Ram => "RAM",
            Category::Storage => "Storage",
            Category::Screen => "Screen",
            Category::CaseType => "Case",
            Category::UsbPorts => "USB ports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One chosen option label per category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentChoices {
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub screen: String,
    pub case_type: String,
    pub usb_ports: String,
}

impl ComponentChoices {
    pub fn new(
        processor: impl Into<String>,
        ram: impl Into<String>,
        storage: impl Into<String>,
        screen: impl Into<String>,
        case_type: impl Into<String>,
        usb_ports: impl Into<String>,
    ) -> Self {
        Self {
            processor: processor.into(),
            ram: ram.into(),
            storage: storage.into(),
            screen: screen.into(),
            case_type: case_type.into(),
            usb_ports: usb_ports.into(),
        }
    }

    /// Chosen label for a category
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Processor => &self.processor,
            Category::Ram => &self.ram,
            Category::Storage => &self.storage,
            Category::Screen => &self.screen,
            Category::CaseType => &self.case_type,
            Category::UsbPorts => &self.usb_ports,
        }
    }

    pub fn set(&mut self, category: Category, label: impl Into<String>) {
        let slot = match category {
            Category::Processor => &mut self.processor,
            Category::Ram => &mut self.ram,
            Category::Storage => &mut self.storage,
            Category::Screen => &mut self.screen,
            Category::CaseType => &mut self.case_type,
            Category::UsbPorts => &mut self.usb_ports,
        };
        *slot = label.into();
    }
}

/// Static price table: category -> option label -> price in whole units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(
    try_from = "BTreeMap<Category, BTreeMap<String, u32>>",
    into = "BTreeMap<Category, BTreeMap<String, u32>>"
)]
pub struct PriceCatalog {
    prices: BTreeMap<Category, BTreeMap<String, u32>>,
}

impl PriceCatalog {
    /// Build a catalog, requiring an option table for every category
    pub fn new(prices: BTreeMap<Category, BTreeMap<String, u32>>) -> Result<Self, CatalogError> {
        if let Some(missing) = Category::ALL.iter().find(|c| !prices.contains_key(*c)) {
            return Err(CatalogError::MissingCategory(*missing));
        }
        Ok(Self { prices })
    }

    /// The shop's standard price list
    pub fn standard() -> Self {
        let table: [(Category, &[(&str, u32)]); 6] = [
            (Category::Processor, &[("p3", 100), ("p5", 120), ("p7", 200)]),
            (Category::Ram, &[("16GB", 75), ("32GB", 150)]),
            (Category::Storage, &[("1TB", 50), ("2TB", 100)]),
            (Category::Screen, &[("19\"", 65), ("23\"", 120)]),
            (Category::CaseType, &[("Mini Tower", 40), ("Midi Tower", 70)]),
            (Category::UsbPorts, &[("2", 10), ("4", 20)]),
        ];

        let prices = table
            .iter()
            .map(|(category, options)| {
                let options = options
                    .iter()
                    .map(|(label, price)| (label.to_string(), *price))
                    .collect();
                (*category, options)
            })
            .collect();

        Self { prices }
    }

    /// Parse a catalog from JSON shaped like `{"processor": {"p3": 100}, ...}`
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let prices: BTreeMap<Category, BTreeMap<String, u32>> = serde_json::from_str(source)
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::new(prices)
    }

    pub fn price(&self, category: Category, label: &str) -> Option<u32> {
        self.prices.get(&category)?.get(label).copied()
    }

    /// Option labels known for a category, in sorted order
    pub fn options(&self, category: Category) -> impl Iterator<Item = &str> {
        self.prices
            .get(&category)
            .into_iter()
            .flat_map(|options| options.keys().map(String::as_str))
    }
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<BTreeMap<Category, BTreeMap<String, u32>>> for PriceCatalog {
    type Error = CatalogError;

    fn try_from(prices: BTreeMap<Category, BTreeMap<String, u32>>) -> Result<Self, Self::Error> {
        Self::new(prices)
    }
}

impl From<PriceCatalog> for BTreeMap<Category, BTreeMap<String, u32>> {
    fn from(catalog: PriceCatalog) -> Self {
        catalog.prices
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog has no options for category: {0}")]
    MissingCategory(Category),

    #[error("Malformed catalog: {0}")]
    Malformed(String),
}

impl From<CatalogError> for tally_core::CoreError {
    fn from(err: CatalogError) -> Self {
        tally_core::CoreError::ValidationError(err.to_string())
    }
}
