use crate::Color;

/// Linearly interpolate between two colors, component-wise.
pub(crate) fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

/// Serialize [`Color`] as `[r, g, b, a]`.
pub(crate) mod serde_color {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::Color;

    pub(crate) fn serialize<S: Serializer>(color: &Color, s: S) -> Result<S::Ok, S::Error> {
        [color.r, color.g, color.b, color.a].serialize(s)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Color, D::Error> {
        let [r, g, b, a] = <[f32; 4]>::deserialize(d)?;
        Ok(Color::from_rgba(r, g, b, a))
    }
}
