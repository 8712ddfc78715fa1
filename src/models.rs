use std::fmt;

/// The four text fields a listing card carries, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Address,
    Price,
    Metadata,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Address, Field::Price, Field::Metadata];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Address => "address",
            Field::Price => "price",
            Field::Metadata => "metadata",
        };
        f.write_str(name)
    }
}

/// One property card pulled off a results page.
///
/// `None` means the field was not found or had no text once normalised.
/// Prices and dates are kept verbatim, nothing is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub title: Option<String>,
    pub address: Option<String>,
    pub price: Option<String>,
    pub metadata: Option<String>,
}

impl Listing {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Address => self.address.as_deref(),
            Field::Price => self.price.as_deref(),
            Field::Metadata => self.metadata.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::Title => self.title = value,
            Field::Address => self.address = value,
            Field::Price => self.price = value,
            Field::Metadata => self.metadata = value,
        }
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|field| !self.has(*field))
    }
}
