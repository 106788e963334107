use serde::{Deserialize, Serialize};

/// The company issuing the invoices. One record per process, read by the
/// print/export path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
}

impl Default for Company {
    fn default() -> Self {
        Self {
            name: "Web Frik".to_owned(),
            address: "Sadar Joypurhat".to_owned(),
            phone: "+8801750119633".to_owned(),
            website: "www.webfrik.com".to_owned(),
        }
    }
}

/// Holder of the single mutable [`Company`] record.
///
/// No validation, last-write-wins, lifetime = process lifetime.
#[derive(Debug, Default)]
pub struct CompanyStore {
    company: Company,
}

impl CompanyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current record.
    pub fn get(&self) -> Company {
        self.company.clone()
    }

    /// Replace the record wholesale.
    pub fn replace(&mut self, company: Company) {
        self.company = company;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_default_profile() {
        let store = CompanyStore::new();
        let company = store.get();
        assert_eq!(company.name, "Web Frik");
        assert_eq!(company.website, "www.webfrik.com");
    }

    #[test]
    fn replace_is_last_write_wins() {
        let mut store = CompanyStore::new();
        store.replace(Company {
            name: "Acme".to_owned(),
            address: "1 Main St".to_owned(),
            phone: "+100".to_owned(),
            website: "acme.test".to_owned(),
        });
        store.replace(Company {
            name: "Acme Ltd".to_owned(),
            address: "1 Main St".to_owned(),
            phone: "+100".to_owned(),
            website: "acme.test".to_owned(),
        });
        assert_eq!(store.get().name, "Acme Ltd");
    }

    #[test]
    fn reads_hand_out_copies() {
        let store = CompanyStore::new();
        let mut copy = store.get();
        copy.name.clear();
        assert_eq!(store.get().name, "Web Frik");
    }
}
