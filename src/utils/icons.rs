// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Icon registry.
//!
//! The icon set is registered once per process on first use and shared by
//! every renderer afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Eye,
    Edit,
    Trash,
    ArrowLeft,
    Box,
    ExclamationCircle,
    Spinner,
    ExclamationTriangle,
    SignOut,
    User,
}

impl Icon {
    pub const ALL: [Icon; 10] = [
        Icon::Eye,
        Icon::Edit,
        Icon::Trash,
        Icon::ArrowLeft,
        Icon::Box,
        Icon::ExclamationCircle,
        Icon::Spinner,
        Icon::ExclamationTriangle,
        Icon::SignOut,
        Icon::User,
    ];

    fn default_glyph(&self) -> &'static str {
        match self {
            Icon::Eye => "👁",
            Icon::Edit => "✎",
            Icon::Trash => "🗑",
            Icon::ArrowLeft => "←",
            Icon::Box => "📦",
            Icon::ExclamationCircle => "❗",
            Icon::Spinner => "⏳",
            Icon::ExclamationTriangle => "⚠",
            Icon::SignOut => "⇥",
            Icon::User => "👤",
        }
    }

    /// Glyph from the process-wide library.
    pub fn glyph(&self) -> &'static str {
        library().glyph(*self)
    }
}

#[derive(Debug)]
pub struct IconLibrary {
    glyphs: HashMap<Icon, &'static str>,
}

impl IconLibrary {
    fn register_all() -> Self {
        let glyphs: HashMap<Icon, &'static str> =
            Icon::ALL.iter().map(|i| (*i, i.default_glyph())).collect();
        debug!(count = glyphs.len(), "Registered icon set");
        Self { glyphs }
    }

    pub fn glyph(&self, icon: Icon) -> &'static str {
        self.glyphs.get(&icon).copied().unwrap_or("")
    }

}

static LIBRARY: OnceLock<IconLibrary> = OnceLock::new();

/// The shared icon library, registering it on first call.
pub fn library() -> &'static IconLibrary {
    LIBRARY.get_or_init(IconLibrary::register_all)
}
