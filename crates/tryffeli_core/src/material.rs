//! Surface materials.

/// Material type tag.
///
/// Only `Lambertian` takes part in direct lighting. `Emissive` and
/// `Reflective` are accepted and shaded as diffuse surfaces, since the
/// renderer has no emission term and no secondary bounces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaterialType {
    Emissive,
    #[default]
    Lambertian,
    Reflective,
}

/// The material properties of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    pub kind: MaterialType,
}

impl Material {
    /// Create a new material of the given type.
    pub fn new(kind: MaterialType) -> Self {
        Self { kind }
    }

    /// A plain diffuse material.
    pub fn lambertian() -> Self {
        Self::new(MaterialType::Lambertian)
    }

    /// Fraction of a light's intensity reflected toward the viewer.
    ///
    /// `cos_theta` is the cosine between the surface normal and the
    /// direction to the light; `falloff` is the distance attenuation.
    pub fn reflectance(&self, cos_theta: f64, falloff: f64) -> f64 {
        match self.kind {
            MaterialType::Lambertian => cos_theta.clamp(0.0, 1.0) * falloff,
            // No emission term or mirror bounce yet; fall back to diffuse.
            MaterialType::Emissive | MaterialType::Reflective => {
                cos_theta.clamp(0.0, 1.0) * falloff
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lambertian() {
        assert_eq!(Material::default().kind, MaterialType::Lambertian);
        assert_eq!(Material::lambertian(), Material::default());
    }

    #[test]
    fn test_lambertian_reflectance() {
        let m = Material::lambertian();
        assert_eq!(m.reflectance(0.5, 0.5), 0.25);
        assert_eq!(m.reflectance(-0.3, 1.0), 0.0);
        assert_eq!(m.reflectance(1.7, 1.0), 1.0);
    }

    #[test]
    fn test_unused_kinds_shade_as_diffuse() {
        let diffuse = Material::lambertian().reflectance(0.8, 0.9);
        for kind in [MaterialType::Emissive, MaterialType::Reflective] {
            assert_eq!(Material::new(kind).reflectance(0.8, 0.9), diffuse);
        }
    }
}
