//! Key codes used by the automation

// Virtual-key codes.
pub const VK_RETURN: u16 = 0x0D;
pub const VK_CONTROL: u16 = 0x11;
pub const VK_V: u16 = 0x56;
/// VK_OEM_3: the ` / ~ key on US layouts, the usual console key.
pub const VK_CONSOLE: u16 = 0xC0;

// Hardware scan codes for the same keys (set 1).
pub const SCAN_ESCAPE: u16 = 0x01;
pub const SCAN_ENTER: u16 = 0x1C;
/// Scan code of the physical key left of `1`, regardless of layout.
pub const SCAN_CONSOLE: u16 = 0x29;
