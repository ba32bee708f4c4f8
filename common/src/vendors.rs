use std::collections::HashMap;

use crate::network::mac::oui_prefix;

/// Vendor reported for a MAC whose OUI is not in the table.
pub const UNKNOWN_VENDOR: &str = "Unknown";

/// Defines the contract for resolving device manufacturers from MAC addresses.
pub trait VendorRepository {
    /// Retrieves the vendor name for a given MAC address.
    ///
    /// # Arguments
    /// * `mac` - The MAC address to lookup, in any separator style.
    ///
    /// # Returns
    /// * `Some(&str)` - The name of the vendor if found.
    /// * `None` - If the OUI is unknown or the address is malformed.
    fn get_vendor(&self, mac: &str) -> Option<&str>;

    /// Like [`get_vendor`](Self::get_vendor), but never empty.
    fn vendor_or_unknown(&self, mac: &str) -> &str {
        self.get_vendor(mac).unwrap_or(UNKNOWN_VENDOR)
    }
}

/// OUI prefix (six uppercase hex digits) to vendor name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VendorTable {
    vendors: HashMap<String, String>,
}

impl VendorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a vendor under an OUI. A later insert for the same key replaces
    /// the earlier one.
    pub fn insert(&mut self, oui: impl Into<String>, vendor: impl Into<String>) {
        self.vendors.insert(oui.into(), vendor.into());
    }

    pub fn get(&self, oui: &str) -> Option<&str> {
        self.vendors.get(oui).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

impl VendorRepository for VendorTable {
    fn get_vendor(&self, mac: &str) -> Option<&str> {
        let prefix = oui_prefix(mac)?;
        self.get(&prefix)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VendorTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = VendorTable::new();
        for (oui, vendor) in iter {
            table.insert(oui, vendor);
        }
        table
    }
}
