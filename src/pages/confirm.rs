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

//! Delete confirmation dialog state.
//!
//! `Idle -> ConfirmPending(id) -> Deleting(id) -> Idle`, or
//! `ConfirmPending(id) -> Idle` on cancel. At most one id is pending.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteConfirmation<K> {
    #[default]
    Idle,
    ConfirmPending(K),
    Deleting(K),
}

impl<K: Copy + PartialEq> DeleteConfirmation<K> {
    /// Open the dialog for `key`, replacing any pending key.
    pub fn request(&mut self, key: K) {
        if let DeleteConfirmation::Deleting(_) = self {
            return;
        }
        *self = DeleteConfirmation::ConfirmPending(key);
    }

    pub fn cancel(&mut self) {
        if let DeleteConfirmation::ConfirmPending(_) = self {
            *self = DeleteConfirmation::Idle;
        }
    }

    /// Move `ConfirmPending(key)` to `Deleting(key)`. False if `key` is not
    /// the pending key.
    pub fn begin(&mut self, key: K) -> bool {
        match self {
            DeleteConfirmation::ConfirmPending(pending) if *pending == key => {
                *self = DeleteConfirmation::Deleting(key);
                true
            }
            _ => false,
        }
    }

    pub fn finish(&mut self) {
        *self = DeleteConfirmation::Idle;
    }

    pub fn pending(&self) -> Option<K> {
        match self {
            DeleteConfirmation::ConfirmPending(k) => Some(*k),
            _ => None,
        }
    }

    /// Whether the dialog is on screen.
    pub fn is_open(&self) -> bool {
        !matches!(self, DeleteConfirmation::Idle)
    }
}
