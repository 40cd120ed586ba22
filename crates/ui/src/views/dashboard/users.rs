use dioxus::prelude::*;

use kotoba_core::model::UserId;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{RowConfirm, UserRowVm, map_user_rows, user_role_message};

/// Admin table of accounts with search and an admin role toggle.
#[component]
pub fn ManageUsersView() -> Element {
    let ctx = use_context::<AppContext>();
    let users = ctx.users();
    let mut query = use_signal(String::new);
    let notice = use_signal(|| None::<String>);
    let mut confirm = use_signal(RowConfirm::default);

    let resource = {
        let users = users.clone();
        use_resource(move || {
            let users = users.clone();
            async move {
                users.list_users().await.map_err(|err| {
                    tracing::warn!(error = %err, "failed to load users");
                    ViewError::Unknown
                })
            }
        })
    };
    let state = view_state_from_resource(resource);

    let on_toggle = use_callback(move |id: String| {
        if !confirm.write().press(&id) {
            return;
        }
        let mut notice = notice;
        let Ok(user_id) = id.parse::<UserId>() else {
            notice.set(Some("Failed to update user role".to_owned()));
            return;
        };
        let users = users.clone();
        let mut resource = resource;
        spawn(async move {
            let result = users.toggle_admin(&user_id).await;
            notice.set(Some(user_role_message(&result)));
            if result.is_ok() {
                resource.restart();
            }
        });
    });

    let set_query = use_callback(move |text: String| {
        confirm.write().cancel();
        query.set(text);
    });

    #[cfg(test)]
    {
        super::use_test_handle(|handles| &handles.row_action, on_toggle);
        super::use_test_handle(|handles| &handles.search, set_query);
    }

    let current_query = query();

    rsx! {
        div { class: "page dashboard-page",
            header { class: "dashboard-header",
                h2 { "Manage Users" }
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search by name or email...",
                    value: "{current_query}",
                    oninput: move |evt| set_query.call(evt.value()),
                }
            }
            if let Some(message) = notice() {
                p { class: "notice", role: "status", "{message}" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading users..." }
                },
                ViewState::Ready(list) => {
                    let rows = map_user_rows(&list, &current_query);
                    rsx! {
                        if rows.is_empty() {
                            p { "No users found." }
                        } else {
                            table { class: "data-table",
                                thead {
                                    tr {
                                        th { "#" }
                                        th { "Name" }
                                        th { "Email" }
                                        th { "Role" }
                                        th { "Action" }
                                    }
                                }
                                tbody {
                                    for (index, row) in rows.into_iter().enumerate() {
                                        UserRow {
                                            key: "{row.id}",
                                            position: index + 1,
                                            armed: confirm.read().is_armed(&row.id),
                                            row,
                                            on_toggle,
                                            on_cancel: move |_| confirm.write().cancel(),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                ViewState::Error(_) => rsx! {
                    p { class: "lesson-error", "Failed to load users. Please try again." }
                },
            }
        }
    }
}

#[component]
fn UserRow(
    row: UserRowVm,
    position: usize,
    armed: bool,
    on_toggle: Callback<String>,
    on_cancel: Callback<()>,
) -> Element {
    let id = row.id.clone();
    let action = if armed { "Confirm" } else { row.action_label() };
    let role_class = if row.is_admin { "role role--admin" } else { "role" };
    rsx! {
        tr {
            td { "{position}" }
            td { "{row.name}" }
            td { "{row.email}" }
            td { span { class: "{role_class}", "{row.role_label}" } }
            td { class: "row-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_toggle.call(id.clone()),
                    "{action}"
                }
                if armed {
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
