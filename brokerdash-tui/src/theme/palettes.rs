use super::ColorPalette;

pub const TOKYO_NIGHT: ColorPalette = ColorPalette::from_hex(
    "Tokyo Night",
    [
        0x1a1b26, 0xc0caf5, 0x565f89, 0x24283b, 0x414868, 0x364a82, 0x7aa2f7, 0xbb9af7, 0x9ece6a,
        0xe0af68, 0xf7768e, 0x7dcfff,
    ],
);

pub const CATPPUCCIN_MOCHA: ColorPalette = ColorPalette::from_hex(
    "Catppuccin Mocha",
    [
        0x1e1e2e, 0xcdd6f4, 0x6c7086, 0x313244, 0x45475a, 0x585b70, 0xcba6f7, 0xf5c2e7, 0xa6e3a1,
        0xf9e2af, 0xf38ba8, 0x89b4fa,
    ],
);

pub const CATPPUCCIN_LATTE: ColorPalette = ColorPalette::from_hex(
    "Catppuccin Latte",
    [
        0xeff1f5, 0x4c4f69, 0x9ca0b0, 0xe6e9ef, 0xbcc0cc, 0xdce0e8, 0x8839ef, 0xea76cb, 0x40a02b,
        0xdf8e1d, 0xd20f39, 0x1e66f5,
    ],
);

pub const DRACULA: ColorPalette = ColorPalette::from_hex(
    "Dracula",
    [
        0x282a36, 0xf8f8f2, 0x6272a4, 0x44475a, 0x6272a4, 0x44475a, 0xbd93f9, 0xff79c6, 0x50fa7b,
        0xf1fa8c, 0xff5555, 0x8be9fd,
    ],
);

pub const NORD: ColorPalette = ColorPalette::from_hex(
    "Nord",
    [
        0x2e3440, 0xeceff4, 0x4c566a, 0x3b4252, 0x4c566a, 0x434c5e, 0x88c0d0, 0x81a1c1, 0xa3be8c,
        0xebcb8b, 0xbf616a, 0x5e81ac,
    ],
);

pub const GRUVBOX_DARK: ColorPalette = ColorPalette::from_hex(
    "Gruvbox Dark",
    [
        0x282828, 0xebdbb2, 0x928374, 0x3c3836, 0x504945, 0x504945, 0xfe8019, 0xd3869b, 0xb8bb26,
        0xfabd2f, 0xfb4934, 0x83a598,
    ],
);

pub const BUILT_IN: [ColorPalette; 6] = [
    TOKYO_NIGHT,
    CATPPUCCIN_MOCHA,
    CATPPUCCIN_LATTE,
    DRACULA,
    NORD,
    GRUVBOX_DARK,
];
