// SPDX-License-Identifier: MPL-2.0
//! Build script for platform-specific resources.
//!
//! On Windows the brand icon is compiled into the executable so it shows up
//! in the taskbar and the file explorer.

fn main() {
    #[cfg(target_os = "windows")]
    {
        let mut res = winresource::WindowsResource::new();
        res.set_icon("assets/branding/galerie.ico");
        res.compile().expect("Failed to compile Windows resources");
    }
}
