use crate::Route;
use crate::api::ApiClient;
use crate::components::button::{Button, ButtonVariant};
use crate::components::input::Input;
use crate::components::toast::notify;
use crate::widgets::empty_state::EmptyState;
use crate::widgets::warning_modal::WarningModal;
use dioxus::prelude::*;
use dioxus_primitives::toast::use_toast;
use rbac::access::RoleSummary;
use rbac::query::TableQuery;
use rbac::table::{FetchDescriptor, FilterInput};
use rbac::wizard::{AddRoleWizard, CancelOutcome, Exit, RoleFormValues, RoleType, WizardStep};
use std::collections::BTreeMap;

const BASE_ROLE_PAGE_SIZE: u32 = 50;

/// Roles list route for a `/roles?...` location
fn roles_route(location: &str) -> Route {
    let query = location
        .split_once('?')
        .map(|(_, query)| query.to_string())
        .unwrap_or_default();
    Route::Roles { query }
}

#[component]
pub fn AddRole(query: String) -> Element {
    let api = use_context::<ApiClient>();
    let toaster = use_toast();
    let nav = navigator();
    let form = use_signal(RoleFormValues::default);
    let mut wizard = use_signal(|| {
        // filters of the roles list this wizard was opened from
        let from = TableQuery::from_query(&query);
        let filters: BTreeMap<String, FilterInput> = from.filters;
        AddRoleWizard::new(from.per_page, filters)
    });

    let leave = move |exit: Exit| {
        if let Some(notification) = exit.notification {
            notify(&toaster, notification);
        }
        nav.push(roles_route(&exit.location));
    };

    let on_cancel = move |_: MouseEvent| {
        let outcome = wizard.write().cancel(&form.read());
        if let CancelOutcome::Leave(exit) = outcome {
            leave(exit);
        }
    };

    let on_submit = {
        let api = api.clone();
        move |_: MouseEvent| {
            let request = match wizard.write().begin_submit(&form.read()) {
                Ok(request) => request,
                Err(_) => return,
            };
            let api = api.clone();
            spawn(async move {
                let result = api.create_role(request).await;
                let outcome = wizard.write().finish_submit(result);
                match outcome {
                    Ok(submitted) => notify(&toaster, submitted.notification),
                    Err(_) => {
                        if let Some(notification) = wizard.read().failure_notification() {
                            notify(&toaster, notification);
                        }
                    }
                }
            });
        }
    };

    let state = wizard.read().clone();
    if state.context.hide_form {
        let close_to = state.close();
        return rsx! {
            div { class: "page-container",
                EmptyState {
                    icon: "✔".to_string(),
                    title: "You have successfully added a new role".to_string(),
                    description: vec!["Return to the roles list to assign the role to groups.".to_string()],
                    action_label: Some("Exit".to_string()),
                    on_action: Some(EventHandler::new(move |_| {
                        nav.push(roles_route(&close_to));
                    })),
                }
            }
        };
    }

    let values = form.read().clone();
    let steps = state.steps(&values);
    let current = state.current_step(&values);
    let is_first = steps.first() == Some(&current);
    let is_last = state.is_last_step(&values);
    let submitting = state.context.submitting;

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Create role" }
            }
            div { class: "wizard",
                ol { class: "wizard-nav",
                    for step in steps {
                        li { class: if step == current { "current" } else { "" }, "{step}" }
                    }
                }
                div { class: "wizard-body",
                    h2 { "{current}" }
                    match current {
                        WizardStep::Details => rsx! { DetailsStep { form } },
                        WizardStep::BaseRole => rsx! { BaseRoleStep { form } },
                        WizardStep::Permissions => rsx! { PermissionsStep { form } },
                        WizardStep::CostResources => rsx! { CostResourcesStep { form } },
                        WizardStep::Review => rsx! { ReviewStep { values: values.clone() } },
                    }
                    if let Some(error) = state.context.error.clone() {
                        p { class: "wizard-error", role: "alert", "{error}" }
                    }
                    div { class: "wizard-footer",
                        if is_last {
                            Button {
                                disabled: submitting,
                                onclick: on_submit,
                                "Submit"
                            }
                        } else {
                            Button {
                                onclick: move |_| {
                                    let values = form.read().clone();
                                    let _ = wizard.write().next(&values);
                                },
                                "Next"
                            }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: is_first || submitting,
                            onclick: move |_| {
                                let values = form.read().clone();
                                wizard.write().back(&values);
                            },
                            "Back"
                        }
                        Button { variant: ButtonVariant::Link, onclick: on_cancel, "Cancel" }
                    }
                }
            }
            WarningModal {
                is_open: state.cancel_warning_visible,
                on_stay: move |_| wizard.write().dismiss_warning(),
                on_exit: move |_| {
                    let exit = wizard.write().confirm_cancel();
                    leave(exit);
                },
            }
        }
    }
}

#[component]
fn DetailsStep(mut form: Signal<RoleFormValues>) -> Element {
    let values = form.read().clone();
    let is_create = values.role_type == RoleType::Create;

    rsx! {
        div { class: "form-group",
            label {
                input {
                    r#type: "radio",
                    name: "role-type",
                    checked: is_create,
                    onchange: move |_| form.write().role_type = RoleType::Create,
                }
                "Create a role from scratch"
            }
            label {
                input {
                    r#type: "radio",
                    name: "role-type",
                    checked: !is_create,
                    onchange: move |_| form.write().role_type = RoleType::Copy,
                }
                "Copy an existing role"
            }
        }
        if is_create {
            div { class: "form-group",
                label { r#for: "role-name", "Role name" }
                Input {
                    id: "role-name",
                    required: true,
                    value: values.role_name.clone(),
                    oninput: move |e: FormEvent| form.write().role_name = e.value(),
                }
            }
            div { class: "form-group",
                label { r#for: "role-description", "Role description" }
                textarea {
                    id: "role-description",
                    value: "{values.role_description}",
                    oninput: move |e: FormEvent| form.write().role_description = e.value(),
                }
            }
        }
    }
}

#[component]
fn BaseRoleStep(mut form: Signal<RoleFormValues>) -> Element {
    let api = use_context::<ApiClient>();
    let roles = use_resource(move || {
        let api = api.clone();
        async move {
            let descriptor = FetchDescriptor::default()
                .with_limit(BASE_ROLE_PAGE_SIZE)
                .with_order_by(Some("display_name".to_string()));
            api.fetch_roles(&descriptor).await
        }
    });
    let values = form.read().clone();

    rsx! {
        match &*roles.read() {
            None => rsx! { p { "Loading roles..." } },
            Some(Err(e)) => rsx! { p { class: "wizard-error", "Failed to load roles: {e}" } },
            Some(Ok(page)) => rsx! {
                div { class: "form-group", role: "radiogroup",
                    for role in page.items.clone() {
                        label { key: "{role.uuid}",
                            input {
                                r#type: "radio",
                                name: "base-role",
                                checked: values.copy_base_role.as_deref() == Some(role.uuid.as_str()),
                                onchange: {
                                    let role = role.clone();
                                    move |_| select_base_role(form, role.clone())
                                },
                            }
                            "{role.label()}"
                        }
                    }
                }
            },
        }
        if values.copy_base_role.is_some() {
            div { class: "form-group",
                label { r#for: "role-copy-name", "Role name" }
                Input {
                    id: "role-copy-name",
                    required: true,
                    value: values.role_copy_name.clone(),
                    oninput: move |e: FormEvent| form.write().role_copy_name = e.value(),
                }
            }
            div { class: "form-group",
                label { r#for: "role-copy-description", "Role description" }
                textarea {
                    id: "role-copy-description",
                    value: "{values.role_copy_description}",
                    oninput: move |e: FormEvent| form.write().role_copy_description = e.value(),
                }
            }
        }
    }
}

/// Picks the role to copy and prefills the copy's name and description
fn select_base_role(mut form: Signal<RoleFormValues>, role: RoleSummary) {
    let mut values = form.write();
    values.role_copy_name = format!("Copy of {}", role.label());
    values.role_copy_description = role.description.clone().unwrap_or_default();
    values.copy_base_role = Some(role.uuid);
}

#[component]
fn PermissionsStep(mut form: Signal<RoleFormValues>) -> Element {
    let api = use_context::<ApiClient>();
    let permissions = use_resource(move || {
        let api = api.clone();
        async move { api.list_permissions().await }
    });
    let selected = form.read().permissions.clone();

    rsx! {
        match &*permissions.read() {
            None => rsx! { p { "Loading permissions..." } },
            Some(Err(e)) => rsx! { p { class: "wizard-error", "Failed to load permissions: {e}" } },
            Some(Ok(list)) => rsx! {
                div { class: "form-group",
                    for permission in list.clone() {
                        label { key: "{permission.permission}",
                            input {
                                r#type: "checkbox",
                                checked: selected.contains(&permission.permission),
                                onchange: {
                                    let key = permission.permission.clone();
                                    move |_| form.write().toggle_permission(&key)
                                },
                            }
                            "{permission.permission}"
                            if let Some(description) = permission.description.clone() {
                                span { class: "permission-description", " {description}" }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn CostResourcesStep(mut form: Signal<RoleFormValues>) -> Element {
    let values = form.read().clone();
    let cost_permissions: Vec<String> = values
        .permissions
        .iter()
        .filter(|p| p.parse::<rbac::wizard::Permission>().is_ok_and(|p| p.is_cost_management()))
        .cloned()
        .collect();

    rsx! {
        for permission in cost_permissions {
            {
                let current = values
                    .resources_for(&permission)
                    .map(|r| r.resources.join(", "))
                    .unwrap_or_default();
                let key = permission.clone();
                rsx! {
                    div { class: "form-group", key: "{permission}",
                        label { "{permission}" }
                        Input {
                            placeholder: "Comma separated resources",
                            value: current,
                            oninput: move |e: FormEvent| {
                                let resources = e
                                    .value()
                                    .split(',')
                                    .map(str::trim)
                                    .filter(|r| !r.is_empty())
                                    .map(str::to_string)
                                    .collect();
                                form.write().set_resources(&key, resources);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewStep(values: RoleFormValues) -> Element {
    let description = match values.description() {
        "" => "-".to_string(),
        d => d.to_string(),
    };

    rsx! {
        dl { class: "review",
            dt { "Name" }
            dd { "{values.name()}" }
            dt { "Description" }
            dd { "{description}" }
            dt { "Permissions" }
            dd {
                ul {
                    for permission in values.permissions.clone() {
                        {
                            let scope = values
                                .resources_for(&permission)
                                .map(|s| format!(" ({})", s.resources.join(", ")))
                                .unwrap_or_default();
                            rsx! {
                                li { key: "{permission}", "{permission}{scope}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
