use crate::info::MapShape;
use crate::options::TriState;

/// Class-level defaults, the middle option layer.
///
/// A derived class without own defaults uses the nearest base class defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassDefaults {
    pub is_required: TriState<bool>,
    pub emit_default_value: TriState<bool>,
}

impl ClassDefaults {
    #[inline]
    pub fn required(mut self, value: bool) -> Self {
        self.is_required = TriState::Explicit(value);
        self
    }

    #[inline]
    pub fn emit_default_value(mut self, value: bool) -> Self {
        self.emit_default_value = TriState::Explicit(value);
        self
    }
}

/// Process-wide engine defaults, the last option layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineDefaults {
    pub is_required: bool,
    pub emit_default_value: bool,
    pub map_shape: MapShape,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            is_required: false,
            emit_default_value: false,
            map_shape: MapShape::Array,
        }
    }
}

/// Member policy after all option layers were applied.
///
/// `map_shape` is `None` for members that are not maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPolicy {
    pub is_required: bool,
    pub emit_default_value: bool,
    pub map_shape: Option<MapShape>,
}
