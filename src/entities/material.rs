//! Material entity type - One optical material offering from a supplier

use serde::Serialize;

use crate::core::codec::{LineReader, LineWriter, ParseError, Record};
use crate::core::validation::{
    require_finite, require_non_negative, require_positive, require_text, ValidationError,
};

/// An optical material (lens blank, frame material, coating, ...)
///
/// Thickness is always positive and price never negative; every setter
/// validates before assigning, so a rejected value leaves the material as it was.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    /// Material category (e.g., "Lens", "Frame")
    #[serde(rename = "type")]
    kind: String,

    /// Physical thickness in millimetres
    thickness: f64,

    /// Optical power in diopters (any sign)
    diopter: f64,

    /// Material name (e.g., "Polycarbonate", "CR-39")
    material_name: String,

    /// Unit price in BGN
    price: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kind: "Unknown".to_string(),
            thickness: 1.0,
            diopter: 0.0,
            material_name: "Unknown".to_string(),
            price: 0.0,
        }
    }
}

impl Material {
    /// Create a validated material
    pub fn new(
        kind: impl Into<String>,
        thickness: f64,
        diopter: f64,
        material_name: impl Into<String>,
        price: f64,
    ) -> Result<Self, ValidationError> {
        let kind = kind.into();
        let material_name = material_name.into();

        require_text("Type", &kind)?;
        require_positive("Thickness", thickness)?;
        require_finite("Diopter", diopter)?;
        require_text("Material name", &material_name)?;
        require_non_negative("Price", price)?;

        Ok(Self {
            kind,
            thickness,
            diopter,
            material_name,
            price,
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn diopter(&self) -> f64 {
        self.diopter
    }

    pub fn material_name(&self) -> &str {
        &self.material_name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) -> Result<(), ValidationError> {
        let kind = kind.into();
        require_text("Type", &kind)?;
        self.kind = kind;
        Ok(())
    }

    pub fn set_thickness(&mut self, thickness: f64) -> Result<(), ValidationError> {
        require_positive("Thickness", thickness)?;
        self.thickness = thickness;
        Ok(())
    }

    /// Any finite diopter of either sign is accepted
    pub fn set_diopter(&mut self, diopter: f64) -> Result<(), ValidationError> {
        require_finite("Diopter", diopter)?;
        self.diopter = diopter;
        Ok(())
    }

    pub fn set_material_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        require_text("Material name", &name)?;
        self.material_name = name;
        Ok(())
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), ValidationError> {
        require_non_negative("Price", price)?;
        self.price = price;
        Ok(())
    }

    /// Whether two materials describe the same catalog item
    ///
    /// Compares type, name, thickness and diopter. Price is not part of the identity.
    pub fn same_item(&self, other: &Material) -> bool {
        self.kind == other.kind
            && self.material_name == other.material_name
            && self.thickness == other.thickness
            && self.diopter == other.diopter
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Type: {}, Thickness: {:.2}mm, Diopter: {:.2}, Material: {}, Price: {:.2} BGN",
            self.kind, self.thickness, self.diopter, self.material_name, self.price
        )
    }
}

impl Record for Material {
    const NAME: &'static str = "material count";

    fn encode(&self, w: &mut LineWriter) {
        w.text(&self.kind)
            .number(self.thickness)
            .number(self.diopter)
            .text(&self.material_name)
            .number(self.price);
    }

    fn decode(r: &mut LineReader<'_>) -> Result<Self, ParseError> {
        let kind = r.text("material type")?;
        require_text("Type", kind).map_err(|e| r.invalid(e))?;

        let thickness: f64 = r.number("thickness")?;
        require_positive("Thickness", thickness).map_err(|e| r.invalid(e))?;

        let diopter: f64 = r.number("diopter")?;
        require_finite("Diopter", diopter).map_err(|e| r.invalid(e))?;

        let material_name = r.text("material name")?;
        require_text("Material name", material_name).map_err(|e| r.invalid(e))?;

        let price: f64 = r.number("price")?;
        require_non_negative("Price", price).map_err(|e| r.invalid(e))?;

        Ok(Self {
            kind: kind.to_string(),
            thickness,
            diopter,
            material_name: material_name.to_string(),
            price,
        })
    }
}
