macro_rules! normalized_option {
    ($s: ident, $(($option: ident, $ty: ty)),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $s {
            $(pub(super) $option: $ty,)*
        }
        impl $s {
            $(pub fn $option(&self) -> & $ty {
                &self.$option
            })*
        }
    };
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FormatFlags: u8 {
        const FIXED                                     = 1 << 0;
        const SCIENTIFIC                                = 1 << 1;
        const LEFT                                      = 1 << 2;
        const RIGHT                                     = 1 << 3;
        const INTERNAL                                  = 1 << 4;
        const SHOW_POS                                  = 1 << 5;
        const UPPERCASE                                 = 1 << 6;
    }
}

normalized_option!(
    FormatOptions,
    (precision, usize),
    (width, usize),
    (fill, char),
    (flags, FormatFlags),
);

impl Default for FormatOptions {
    fn default() -> Self {
        crate::RawFormatOptions::default().normalize()
    }
}

impl FormatOptions {
    /// Fixed notation wins when both notations are set.
    #[inline(always)]
    pub const fn fixed(&self) -> bool {
        self.flags.contains(FormatFlags::FIXED)
    }

    #[inline(always)]
    pub const fn left(&self) -> bool {
        self.flags.contains(FormatFlags::LEFT)
    }

    #[inline(always)]
    pub const fn internal(&self) -> bool {
        self.flags.contains(FormatFlags::INTERNAL)
    }

    #[inline(always)]
    pub const fn show_pos(&self) -> bool {
        self.flags.contains(FormatFlags::SHOW_POS)
    }

    #[inline(always)]
    pub const fn uppercase(&self) -> bool {
        self.flags.contains(FormatFlags::UPPERCASE)
    }
}
