//! Supplier entity type - Optical material vendors and their catalogs

use serde::Serialize;

use crate::core::codec::{LineReader, LineWriter, ParseError, Record};
use crate::core::validation::{require_text, validate_phone, validate_tax_id, ValidationError};
use crate::entities::material::Material;
use crate::entities::EntityError;

/// A Supplier entity
///
/// The tax ID and phone number are validated before being stored. The
/// material catalog keeps insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supplier {
    /// Tax identifier (BULSTAT), 9 or 13 digits
    tax_id: String,

    /// Company name
    name: String,

    /// City or address
    location: String,

    /// Contact phone number
    phone: String,

    /// Material catalog
    materials: Vec<Material>,
}

impl Supplier {
    /// Create a new supplier with an empty catalog
    pub fn new(
        tax_id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let tax_id = tax_id.into();
        let name = name.into();
        let location = location.into();
        let phone = phone.into();

        validate_tax_id(&tax_id)?;
        require_text("Name", &name)?;
        require_text("Location", &location)?;
        validate_phone(&phone)?;

        Ok(Self {
            tax_id,
            name,
            location,
            phone,
            materials: Vec::new(),
        })
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn set_tax_id(&mut self, tax_id: impl Into<String>) -> Result<(), ValidationError> {
        let tax_id = tax_id.into();
        validate_tax_id(&tax_id)?;
        self.tax_id = tax_id;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        require_text("Name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> Result<(), ValidationError> {
        let location = location.into();
        require_text("Location", &location)?;
        self.location = location;
        Ok(())
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = phone.into();
        validate_phone(&phone)?;
        self.phone = phone;
        Ok(())
    }

    /// Append a material to the catalog (no deduplication)
    pub fn add_material(&mut self, material: Material) {
        self.materials.push(material);
    }

    /// Remove and return the material at `index`
    pub fn remove_material(&mut self, index: usize) -> Result<Material, EntityError> {
        self.check_index(index)?;
        Ok(self.materials.remove(index))
    }

    /// Get a copy of the material at `index`
    pub fn material(&self, index: usize) -> Result<Material, EntityError> {
        self.check_index(index)?;
        Ok(self.materials[index].clone())
    }

    fn check_index(&self, index: usize) -> Result<(), EntityError> {
        if index < self.materials.len() {
            Ok(())
        } else {
            Err(EntityError::IndexOutOfRange {
                what: "material",
                index,
                len: self.materials.len(),
            })
        }
    }
}

impl std::fmt::Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(80);
        writeln!(f, "{}", rule)?;
        writeln!(f, "Supplier Information:")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Tax ID: {}", self.tax_id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Location: {}", self.location)?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f, "Number of materials: {}", self.materials.len())?;
        write!(f, "{}", rule)
    }
}

impl Record for Supplier {
    const NAME: &'static str = "supplier count";

    fn encode(&self, w: &mut LineWriter) {
        w.text(&self.tax_id)
            .text(&self.name)
            .text(&self.location)
            .text(&self.phone)
            .number(self.materials.len());
        for material in &self.materials {
            material.encode(w);
        }
    }

    fn decode(r: &mut LineReader<'_>) -> Result<Self, ParseError> {
        let tax_id = r.text("tax ID")?;
        validate_tax_id(tax_id).map_err(|e| r.invalid(e))?;

        let name = r.text("supplier name")?;
        require_text("Name", name).map_err(|e| r.invalid(e))?;

        let location = r.text("location")?;
        require_text("Location", location).map_err(|e| r.invalid(e))?;

        let phone = r.text("phone")?;
        validate_phone(phone).map_err(|e| r.invalid(e))?;

        let count: usize = r.number(Material::NAME)?;
        let mut materials = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            materials.push(Material::decode(r)?);
        }

        Ok(Self {
            tax_id: tax_id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            phone: phone.to_string(),
            materials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::{decode_all, encode_all};

    fn acme() -> Supplier {
        Supplier::new("123456789", "Acme Optics", "Sofia", "+359-88-123-4567").unwrap()
    }

    fn lens(name: &str) -> Material {
        Material::new("Lens", 1.5, -2.0, name, 12.5).unwrap()
    }

    #[test]
    fn test_supplier_creation() {
        let supplier = acme();
        assert_eq!(supplier.tax_id(), "123456789");
        assert_eq!(supplier.name(), "Acme Optics");
        assert_eq!(supplier.location(), "Sofia");
        assert_eq!(supplier.phone(), "+359-88-123-4567");
        assert_eq!(supplier.material_count(), 0);
    }

    #[test]
    fn test_supplier_rejects_invalid_identity() {
        assert!(Supplier::new("12345678", "A", "B", "0881234567").is_err());
        assert!(Supplier::new("abcdefghi", "A", "B", "0881234567").is_err());
        assert!(Supplier::new("1234567890123", "A", "B", "0881234567").is_ok());
        assert!(Supplier::new("123456789", "", "B", "0881234567").is_err());
        assert!(Supplier::new("123456789", "A", "", "0881234567").is_err());
        assert!(Supplier::new("123456789", "A", "B", "123").is_err());
    }

    #[test]
    fn test_rejected_setter_keeps_previous_value() {
        let mut supplier = acme();
        assert!(supplier.set_tax_id("1234").is_err());
        assert!(supplier.set_phone("12a3456789").is_err());
        assert!(supplier.set_name("").is_err());
        assert_eq!(supplier, acme());

        supplier.set_location("Plovdiv").unwrap();
        assert_eq!(supplier.location(), "Plovdiv");
    }

    #[test]
    fn test_materials_keep_insertion_order() {
        let mut supplier = acme();
        supplier.add_material(lens("CR-39"));
        supplier.add_material(lens("Trivex"));
        supplier.add_material(lens("CR-39"));

        assert_eq!(supplier.material_count(), 3);
        assert_eq!(supplier.material(1).unwrap().material_name(), "Trivex");

        let removed = supplier.remove_material(0).unwrap();
        assert_eq!(removed.material_name(), "CR-39");
        assert_eq!(supplier.materials()[0].material_name(), "Trivex");
    }

    #[test]
    fn test_material_index_out_of_range() {
        let mut supplier = acme();
        supplier.add_material(lens("CR-39"));

        assert_eq!(
            supplier.material(1),
            Err(EntityError::IndexOutOfRange {
                what: "material",
                index: 1,
                len: 1
            })
        );
        assert!(supplier.remove_material(5).is_err());
        assert_eq!(supplier.material_count(), 1);
    }

    #[test]
    fn test_supplier_encoding_layout() {
        let mut supplier = acme();
        supplier.add_material(lens("CR-39"));

        let mut w = LineWriter::new();
        supplier.encode(&mut w);
        assert_eq!(
            w.finish(),
            "123456789\nAcme Optics\nSofia\n+359-88-123-4567\n1\nLens\n1.5\n-2\nCR-39\n12.5\n"
        );
    }

    #[test]
    fn test_supplier_roundtrip() {
        let mut supplier = acme();
        supplier.add_material(lens("CR-39"));
        supplier.add_material(Material::new("Frame", 2.0, 0.0, "Titanium", 80.0).unwrap());

        let decoded: Vec<Supplier> = decode_all(&encode_all(&[supplier.clone()])).unwrap();
        assert_eq!(decoded, vec![supplier]);
    }

    #[test]
    fn test_decode_truncated_catalog_fails() {
        let text = "1\n123456789\nAcme\nSofia\n0881234567\n2\nLens\n1.5\n-2\nCR-39\n12.5\n";
        assert!(matches!(
            decode_all::<Supplier>(text),
            Err(ParseError::Truncated { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_tax_id() {
        let text = "1\n12345\nAcme\nSofia\n0881234567\n0\n";
        assert!(matches!(
            decode_all::<Supplier>(text),
            Err(ParseError::Invalid { line: 2, .. })
        ));
    }
}
