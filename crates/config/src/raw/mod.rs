use crate::normalized::{FormatFlags, FormatOptions};

macro_rules! with_option {
    ($s: ident, $(($option: ident, $ty: ty)),* $(,)?) => {
        #[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $s {
            $(pub(super) $option: Option<$ty>,)*
        }
        impl $s {
            paste::paste! {
                $(
                    pub fn [<with_ $option>](mut self, $option: $ty) -> Self {
                        self.$option = Some($option);
                        self
                    }
                    pub fn [<with_ $option _if_none>](mut self, $option: $ty) -> Self {
                        if self.$option.is_none() {
                            self.$option = Some($option);
                        }
                        self
                    }
                )*
            }
        }
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum RawNotation {
    #[serde(alias = "fixed")]
    Fixed,
    #[default]
    #[serde(alias = "scientific")]
    Scientific,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum RawAdjust {
    #[serde(alias = "left")]
    Left,
    #[default]
    #[serde(alias = "right")]
    Right,
    #[serde(alias = "internal")]
    Internal,
}

with_option!(
    RawFormatOptions,
    (precision, usize),
    (width, usize),
    (fill, char),
    (notation, RawNotation),
    (adjust, RawAdjust),
    (show_pos, bool),
    (uppercase, bool),
);

impl RawFormatOptions {
    pub fn normalize(self) -> FormatOptions {
        let precision = self.precision.unwrap_or(crate::DEFAULT_PRECISION);
        let width = self.width.unwrap_or_default();
        let fill = self.fill.unwrap_or(' ');

        let mut flags = match self.notation.unwrap_or_default() {
            RawNotation::Fixed => FormatFlags::FIXED,
            RawNotation::Scientific => FormatFlags::SCIENTIFIC,
        };
        flags |= match self.adjust.unwrap_or_default() {
            RawAdjust::Left => FormatFlags::LEFT,
            RawAdjust::Right => FormatFlags::RIGHT,
            RawAdjust::Internal => FormatFlags::INTERNAL,
        };
        if self.show_pos.unwrap_or_default() {
            flags |= FormatFlags::SHOW_POS;
        }
        if self.uppercase.unwrap_or_default() {
            flags |= FormatFlags::UPPERCASE;
        }

        FormatOptions {
            precision,
            width,
            fill,
            flags,
        }
    }
}
