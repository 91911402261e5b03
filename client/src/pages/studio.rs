//! Staging studio: create a session, then generate, save, revert, and browse
//! history through the remote staging API.
//!
//! Every request goes through `StudioState::begin`, so only one runs at a
//! time and validation errors surface inline before anything is sent.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::navbar::Navbar;
use crate::components::version_history::VersionHistory;
use crate::net::types::CreateSessionForm;
use crate::state::studio::{StudioAction, StudioState};
use crate::state::user::UserState;

#[cfg(feature = "hydrate")]
use crate::net::api;

type ReadField = fn(&CreateSessionForm) -> String;
type WriteField = fn(&mut CreateSessionForm, String);

const FORM_FIELDS: [(&str, &str, ReadField, WriteField); 7] = [
    ("Property ID", "e.g. maple-ave-12", |f| f.property_id.clone(), |f, v| f.property_id = v),
    ("Room name", "e.g. Living room", |f| f.room_name.clone(), |f, v| f.room_name = v),
    ("Style", "Modern, Scandinavian, ...", |f| f.style.clone().unwrap_or_default(), |f, v| f.style = Some(v)),
    ("Theme", "Cozy, airy, luxe, ...", |f| f.theme.clone().unwrap_or_default(), |f, v| f.theme = Some(v)),
    ("Color", "Warm neutrals, sage, ...", |f| f.color.clone().unwrap_or_default(), |f, v| f.color = Some(v)),
    ("Prompt", "Anything else the stager should know", |f| f.prompt.clone().unwrap_or_default(), |f, v| f.prompt = Some(v)),
    ("User ID", "Filled from your demo profile", |f| f.user_id.clone(), |f, v| f.user_id = v),
];

/// Start `action`, returning whether the caller should send the request.
fn begin(studio: RwSignal<StudioState>, action: StudioAction) -> bool {
    studio.try_update(|s| s.begin(action)).unwrap_or(false)
}

#[component]
fn SessionForm(studio: RwSignal<StudioState>) -> impl IntoView {
    let user = expect_context::<RwSignal<UserState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        studio.update(|s| {
            if s.form.user_id.trim().is_empty() {
                s.form.user_id = user.with_untracked(UserState::user_id);
            }
        });
        if !begin(studio, StudioAction::CreateSession) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let form = studio.with_untracked(|s| s.form.clone());
            leptos::task::spawn_local(async move {
                match api::create_session(&form).await {
                    Ok(session) => studio.update(|s| s.session_created(session)),
                    Err(err) => studio.update(|s| s.fail(&err)),
                }
            });
        }
    };

    view! {
        <form class="studio-form" on:submit=on_submit>
            <h2>"New staging session"</h2>
            {FORM_FIELDS
                .into_iter()
                .map(|(label, placeholder, read, write)| {
                    view! {
                        <label class="studio-form__field">
                            <span>{label}</span>
                            <input
                                type="text"
                                placeholder=placeholder
                                prop:value=move || studio.with(|s| read(&s.form))
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    studio.update(|s| write(&mut s.form, value));
                                }
                            />
                        </label>
                    }
                })
                .collect_view()}
            <button class="btn btn--primary" type="submit" disabled=move || studio.with(|s| s.busy.is_some())>
                "Create session"
            </button>
        </form>
    }
}

#[component]
fn SessionWorkspace(studio: RwSignal<StudioState>) -> impl IntoView {
    let mask_ref = NodeRef::<leptos::html::Input>::new();
    let busy = move || studio.with(|s| s.busy.is_some());

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !begin(studio, StudioAction::Generate) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let (session_id, prompt) = studio.with_untracked(|s| {
                (s.session_id().map(str::to_owned).unwrap_or_default(), s.prompt.trim().to_owned())
            });
            let mask = mask_ref
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(api::MaskFile::from_file);
            leptos::task::spawn_local(async move {
                match api::generate_image(&session_id, &prompt, mask.as_ref()).await {
                    Ok(image_url) => studio.update(|s| s.image_generated(image_url)),
                    Err(err) => studio.update(|s| s.fail(&err)),
                }
            });
        }
    };

    let on_save = move |_| {
        if !begin(studio, StudioAction::Save) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let session_id = studio.with_untracked(|s| s.session_id().map(str::to_owned).unwrap_or_default());
            leptos::task::spawn_local(async move {
                match api::save_version(&session_id).await {
                    Ok(version) => studio.update(|s| s.version_saved(version)),
                    Err(err) => studio.update(|s| s.fail(&err)),
                }
            });
        }
    };

    let on_revert = move |_| {
        if !begin(studio, StudioAction::Revert) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let session_id = studio.with_untracked(|s| s.session_id().map(str::to_owned).unwrap_or_default());
            leptos::task::spawn_local(async move {
                match api::revert_version(&session_id).await {
                    Ok(revert) => studio.update(|s| s.reverted(revert)),
                    Err(err) => studio.update(|s| s.fail(&err)),
                }
            });
        }
    };

    let on_history = move |_| {
        if !begin(studio, StudioAction::LoadHistory) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let session_id = studio.with_untracked(|s| s.session_id().map(str::to_owned).unwrap_or_default());
            leptos::task::spawn_local(async move {
                let versions = api::fetch_versions(&session_id).await;
                let chat = api::fetch_chat_history(&session_id).await;
                match (versions, chat) {
                    (Ok(versions), Ok(chat)) => studio.update(|s| s.history_loaded(versions, chat)),
                    (Err(err), _) | (_, Err(err)) => studio.update(|s| s.fail(&err)),
                }
            });
        }
    };

    let session_label = move || {
        studio.with(|s| {
            s.session.as_ref().map_or_else(String::new, |session| {
                format!(
                    "Session {} · version {} of {}",
                    session.session_id, session.current_version, session.total_versions
                )
            })
        })
    };

    view! {
        <section class="studio-workspace">
            <p class="studio-workspace__session">{session_label}</p>
            <figure class="studio-workspace__preview">
                <img src=move || studio.with(|s| s.current_url.clone().unwrap_or_default()) alt="Current staged image"/>
            </figure>
            <form class="studio-workspace__prompt" on:submit=on_generate>
                <textarea
                    placeholder="Describe the change: add a navy sectional, warm oak floors..."
                    prop:value=move || studio.with(|s| s.prompt.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        studio.update(|s| s.prompt = value);
                    }
                ></textarea>
                <label class="studio-workspace__mask">
                    <span>"Mask (optional)"</span>
                    <input type="file" accept="image/*" node_ref=mask_ref/>
                </label>
                <div class="studio-workspace__actions">
                    <button class="btn btn--primary" type="submit" disabled=busy>"Generate"</button>
                    <button class="btn" type="button" disabled=busy on:click=on_save>"Save version"</button>
                    <button class="btn" type="button" disabled=busy on:click=on_revert>"Revert"</button>
                    <button class="btn" type="button" disabled=busy on:click=on_history>"Load history"</button>
                    <A href="/compare" attr:class="btn btn--ghost">"Compare"</A>
                </div>
            </form>
            <VersionHistory
                versions=Signal::derive(move || studio.with(|s| s.versions.clone()))
                chat=Signal::derive(move || studio.with(|s| s.chat.clone()))
                current_version=Signal::derive(move || studio.with(|s| s.session.as_ref().map(|x| x.current_version)))
            />
        </section>
    }
}

#[component]
pub fn StudioPage() -> impl IntoView {
    let studio = expect_context::<RwSignal<StudioState>>();
    let has_session = move || studio.with(|s| s.session.is_some());

    view! {
        <div class="studio-page">
            <Navbar/>
            <main class="studio">
                <h1>"Staging studio"</h1>
                {move || studio.with(|s| s.busy.map(|action| view! { <p class="studio__busy">{action.busy_label()}</p> }))}
                {move || studio.with(|s| s.error.clone().map(|message| view! { <p class="studio__error" role="alert">{message}</p> }))}
                {move || studio.with(|s| s.notice.clone().map(|message| view! { <p class="studio__notice">{message}</p> }))}
                <Show when=has_session fallback=move || view! { <SessionForm studio=studio/> }>
                    <SessionWorkspace studio=studio/>
                </Show>
            </main>
        </div>
    }
}
