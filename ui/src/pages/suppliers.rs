use payloads::requests::{CreateSupplier, SupplierListQuery};
use payloads::{Supplier, SupplierId};
use yew::prelude::*;

use crate::components::{ConfirmationModal, PaginationControls};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::use_list;

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm border \
                           border-neutral-300 dark:border-neutral-600 \
                           rounded-md bg-white dark:bg-neutral-700 \
                           text-neutral-900 dark:text-neutral-100";

fn empty_draft() -> CreateSupplier {
    CreateSupplier {
        name: String::new(),
        airport: String::new(),
        contact_name: String::new(),
        phone: String::new(),
        email: String::new(),
        active: true,
    }
}

fn draft_from(supplier: &Supplier) -> CreateSupplier {
    CreateSupplier {
        name: supplier.name.clone(),
        airport: supplier.airport.clone(),
        contact_name: supplier.contact_name.clone(),
        phone: supplier.phone.clone(),
        email: supplier.email.clone(),
        active: supplier.active,
    }
}

/// What the page is doing besides listing: creating, editing one row, or
/// confirming a delete.
#[derive(Clone, PartialEq)]
enum Editing {
    None,
    Creating,
    Row(SupplierId),
    ConfirmingDelete(Supplier),
}

#[function_component]
pub fn SuppliersPage() -> Html {
    let toast = use_toast();

    let query = use_state(SupplierListQuery::default);
    let list = use_list(
        (*query).clone(),
        |query: SupplierListQuery| async move {
            get_api_client().list_suppliers(&query).await
        },
    );

    let editing = use_state(|| Editing::None);
    let draft = use_state(empty_draft);
    let is_saving = use_state(|| false);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value().trim().to_string();
            query.set(SupplierListQuery {
                search: Some(value).filter(|s| !s.is_empty()),
                page: 1,
                ..(*query).clone()
            });
        })
    };

    let on_page_change = {
        let query = query.clone();
        Callback::from(move |page: i64| {
            query.set(SupplierListQuery {
                page,
                ..(*query).clone()
            });
        })
    };

    let open_create = {
        let editing = editing.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(empty_draft());
            editing.set(Editing::Creating);
        })
    };

    let close_editor = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(Editing::None))
    };

    let on_save = {
        let editing = editing.clone();
        let draft = draft.clone();
        let is_saving = is_saving.clone();
        let toast = toast.clone();
        let refetch = list.refetch.clone();
        Callback::from(move |_: MouseEvent| {
            let details = (*draft).clone();
            let target = (*editing).clone();
            let editing = editing.clone();
            let is_saving = is_saving.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();
            is_saving.set(true);
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let result = match target {
                    Editing::Creating => {
                        api_client.create_supplier(&details).await
                    }
                    Editing::Row(id) => {
                        api_client.update_supplier(&id, &details).await
                    }
                    Editing::None | Editing::ConfirmingDelete(_) => {
                        is_saving.set(false);
                        return;
                    }
                };
                match result {
                    Ok(supplier) => {
                        toast.success(format!("{} saved.", supplier.name));
                        editing.set(Editing::None);
                        refetch.emit(());
                    }
                    // Editor stays open with the attempted values
                    Err(error) => {
                        toast.error(error.to_string());
                    }
                }
                is_saving.set(false);
            });
        })
    };

    let on_delete_confirm = {
        let editing = editing.clone();
        let toast = toast.clone();
        let refetch = list.refetch.clone();
        Callback::from(move |_: ()| {
            let Editing::ConfirmingDelete(supplier) = (*editing).clone()
            else {
                return;
            };
            let editing = editing.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();
            yew::platform::spawn_local(async move {
                match get_api_client().delete_supplier(&supplier.id).await {
                    Ok(outcome) => {
                        let message = outcome
                            .message
                            .unwrap_or_else(|| "Supplier deleted.".into());
                        toast.success(message);
                        refetch.emit(());
                    }
                    // e.g. supplier still has products attached
                    Err(error) => {
                        toast.error(error.to_string());
                    }
                }
                editing.set(Editing::None);
            });
        })
    };

    let text_field = |label: &'static str,
                      value: String,
                      update: fn(&mut CreateSupplier, String)| {
        let draft = draft.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            update(&mut next, input.value());
            draft.set(next);
        });
        html! {
            <label class="block text-sm text-neutral-600 \
                          dark:text-neutral-400">
                {label}
                <input type="text" class={INPUT_CLASS} {value} {oninput} />
            </label>
        }
    };

    let editor_open =
        matches!(*editing, Editing::Creating | Editing::Row(_));

    let editor = if editor_open {
        let on_active = {
            let draft = draft.clone();
            Callback::from(move |e: Event| {
                let input: web_sys::HtmlInputElement =
                    e.target_unchecked_into();
                let mut next = (*draft).clone();
                next.active = input.checked();
                draft.set(next);
            })
        };
        let on_close_click = {
            let close_editor = close_editor.clone();
            Callback::from(move |_: MouseEvent| close_editor.emit(()))
        };
        html! {
            <div class="border border-neutral-200 dark:border-neutral-700 \
                        rounded-lg p-4 space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    {text_field("Name", draft.name.clone(),
                        |d, v| d.name = v)}
                    {text_field("Airport", draft.airport.clone(),
                        |d, v| d.airport = v.to_uppercase())}
                    {text_field("Contact name", draft.contact_name.clone(),
                        |d, v| d.contact_name = v)}
                    {text_field("Phone", draft.phone.clone(),
                        |d, v| d.phone = v)}
                    {text_field("Email", draft.email.clone(),
                        |d, v| d.email = v)}
                    <label class="flex items-center gap-2 text-sm \
                                  text-neutral-600 dark:text-neutral-400">
                        <input
                            type="checkbox"
                            checked={draft.active}
                            onchange={on_active}
                        />
                        {"Active"}
                    </label>
                </div>
                <div class="flex justify-end gap-3">
                    <button
                        onclick={on_close_click}
                        disabled={*is_saving}
                        class="px-4 py-2 text-sm font-medium \
                               text-neutral-700 dark:text-neutral-300 \
                               border border-neutral-300 \
                               dark:border-neutral-600 rounded-md \
                               hover:bg-neutral-50 disabled:opacity-50"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        onclick={on_save.clone()}
                        disabled={*is_saving}
                        class="px-4 py-2 text-sm font-medium text-white \
                               bg-blue-600 hover:bg-blue-700 rounded-md \
                               disabled:opacity-50"
                    >
                        {if *is_saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    let header_class = "px-4 py-3 text-left text-xs font-medium \
                        text-neutral-500 dark:text-neutral-400 uppercase \
                        tracking-wider";
    let cell_class = "px-4 py-3 text-sm text-neutral-900 \
                      dark:text-neutral-100 whitespace-nowrap";

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-neutral-900 \
                           dark:text-neutral-100">
                    {"Suppliers"}
                </h1>
                <button
                    onclick={open_create}
                    class="px-3 py-2 text-sm font-medium text-white \
                           bg-blue-600 hover:bg-blue-700 rounded-md"
                >
                    {"New supplier"}
                </button>
            </div>

            <input
                type="text"
                class="px-3 py-2 text-sm border border-neutral-300 \
                       dark:border-neutral-600 rounded-md bg-white \
                       dark:bg-neutral-700 text-neutral-900 \
                       dark:text-neutral-100"
                placeholder="Search suppliers..."
                value={query.search.clone().unwrap_or_default()}
                oninput={on_search}
            />

            {editor}

            <div class="overflow-x-auto border border-neutral-200 \
                        dark:border-neutral-700 rounded-lg">
                <table class="min-w-full divide-y divide-neutral-200 \
                              dark:divide-neutral-700">
                    <thead class="bg-neutral-50 dark:bg-neutral-800">
                        <tr>
                            <th class={header_class}>{"Name"}</th>
                            <th class={header_class}>{"Airport"}</th>
                            <th class={header_class}>{"Contact"}</th>
                            <th class={header_class}>{"Phone"}</th>
                            <th class={header_class}>{"Email"}</th>
                            <th class={header_class}>{"Active"}</th>
                            <th class={header_class}>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-neutral-200 \
                                  dark:divide-neutral-700">
                        {for list.state.rows.iter().map(|supplier| {
                            let on_edit = {
                                let editing = editing.clone();
                                let draft = draft.clone();
                                let supplier = supplier.clone();
                                Callback::from(move |_: MouseEvent| {
                                    draft.set(draft_from(&supplier));
                                    editing.set(Editing::Row(supplier.id));
                                })
                            };
                            let on_delete = {
                                let editing = editing.clone();
                                let supplier = supplier.clone();
                                Callback::from(move |_: MouseEvent| {
                                    editing.set(Editing::ConfirmingDelete(
                                        supplier.clone(),
                                    ));
                                })
                            };
                            html! {
                                <tr key={supplier.id.0}>
                                    <td class={cell_class}>
                                        {&supplier.name}
                                    </td>
                                    <td class={cell_class}>
                                        {&supplier.airport}
                                    </td>
                                    <td class={cell_class}>
                                        {&supplier.contact_name}
                                    </td>
                                    <td class={cell_class}>
                                        {&supplier.phone}
                                    </td>
                                    <td class={cell_class}>
                                        {&supplier.email}
                                    </td>
                                    <td class={cell_class}>
                                        {if supplier.active {
                                            "Yes"
                                        } else {
                                            "No"
                                        }}
                                    </td>
                                    <td class={cell_class}>
                                        <div class="flex gap-2">
                                            <button
                                                onclick={on_edit}
                                                class="text-sm font-medium \
                                                       text-blue-600 \
                                                       hover:underline"
                                            >
                                                {"Edit"}
                                            </button>
                                            <button
                                                onclick={on_delete}
                                                class="text-sm font-medium \
                                                       text-red-600 \
                                                       hover:underline"
                                            >
                                                {"Delete"}
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                page={query.page}
                limit={query.limit}
                total={list.state.total}
                on_page_change={on_page_change}
                is_loading={list.state.is_loading()}
            />

            if let Editing::ConfirmingDelete(supplier) = (*editing).clone() {
                <ConfirmationModal
                    title="Delete supplier"
                    message={format!(
                        "Delete {}? Products attached to it must be \
                         removed first.",
                        supplier.name
                    )}
                    confirm_text="Delete"
                    on_confirm={on_delete_confirm}
                    on_close={close_editor.clone()}
                />
            }
        </div>
    }
}
