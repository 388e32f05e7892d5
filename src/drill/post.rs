// Copyright 2025 Fernando Borretti
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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::drill::state::MutableState;
use crate::drill::state::ServerState;
use crate::error::Fallible;
use crate::stats::MAX_DAYS;
use crate::stats::WEEK;
use crate::stats::weekly_stats;
use crate::types::date::Date;
use crate::types::timestamp::Timestamp;

#[derive(Debug, Deserialize, PartialEq)]
enum Action {
    Know,
    DontKnow,
    LoadMore,
}

impl Action {
    /// Whether the action answers the current card, and how.
    pub fn known(&self) -> Option<bool> {
        match self {
            Action::Know => Some(true),
            Action::DontKnow => Some(false),
            Action::LoadMore => None,
        }
    }
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match action_handler(state, form.action) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
        }
    }
    Redirect::to("/")
}

fn action_handler(state: ServerState, action: Action) -> Fallible<()> {
    let mut mutable = state.mutable.lock().unwrap();
    match action.known() {
        Some(known) => {
            mutable.session.answer(known)?;
        }
        None => {
            load_more(&mut mutable, Timestamp::now().date());
        }
    }
    Ok(())
}

/// Widen the weekly view by a week, if the log goes back further than the
/// current window.
fn load_more(mutable: &mut MutableState, today: Date) {
    let weekly = weekly_stats(mutable.session.recency(), today, mutable.days_to_show);
    if !weekly.can_load_more {
        log::debug!("No older activity, ignoring load more.");
        return;
    }
    mutable.days_to_show = (mutable.days_to_show + WEEK).min(MAX_DAYS);
    log::debug!("Showing {} days of progress.", mutable.days_to_show);
}
