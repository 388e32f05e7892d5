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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::drill::state::ServerState;
use crate::drill::template::page_template;
use crate::drill::view::read_progress;
use crate::drill::view::recent_words;
use crate::drill::view::weekly_progress;
use crate::drill::view::word_card;
use crate::stats;
use crate::types::timestamp::Timestamp;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mutable = state.mutable.lock().unwrap();
    let session = &mutable.session;
    let today = Timestamp::now().date();
    let card: Markup = match session.current() {
        Ok(Some((entry, record))) => {
            let controls = html! {
                form.controls action="/" method="post" {
                    button id="know" type="submit" name="action" value="Know" { "Know" }
                    button id="dont-know" type="submit" name="action" value="DontKnow" { "Don't Know" }
                }
            };
            html! {
                div.header {
                    div.word {
                        span.title { (entry.word) }
                        " "
                        span.reads { "(Read: " (entry.read_count) ")" }
                    }
                    div.total {
                        "Total: " (state.total_words)
                    }
                }
                (controls)
                hr;
                details.panel {
                    summary { "Show Word Details" }
                    (word_card(record))
                    hr;
                    (controls)
                }
            }
        }
        Ok(None) => {
            html! {
                div.finished {
                    h1 { "No words to study." }
                }
            }
        }
        Err(e) => {
            log::error!("{e}");
            html! {
                div.error {
                    (e.message())
                }
            }
        }
    };
    let recent_size = session.collection.config.recent_words_size;
    let recency = session.recency();
    let recency = &recency[..recency.len().min(recent_size)];
    let weekly = stats::weekly_stats(session.recency(), today, mutable.days_to_show);
    let reads = stats::read_progress(session.entries());
    let body = html! {
        div.root {
            div.card {
                (card)
                hr;
                (recent_words(recency, &session.collection.dataset))
                (weekly_progress(&weekly, today))
                (read_progress(&reads))
            }
        }
    };
    let html = page_template(body);
    (StatusCode::OK, Html(html.into_string()))
}
