use payloads::requests::{
    CreateProduct, ProductListQuery, SupplierListQuery,
};
use payloads::{Product, ProductId, ServiceType, SupplierId};
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::components::{ConfirmationModal, PaginationControls};
use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::use_list;
use crate::utils::money::{format_amount, parse_amount};

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm border \
                           border-neutral-300 dark:border-neutral-600 \
                           rounded-md bg-white dark:bg-neutral-700 \
                           text-neutral-900 dark:text-neutral-100";

fn empty_draft() -> CreateProduct {
    CreateProduct {
        supplier_id: SupplierId(0),
        name: String::new(),
        airport: String::new(),
        service_type: ServiceType::ParkAndRide,
        daily_rate: Decimal::ZERO,
        opens_at: "00:00".to_string(),
        closes_at: "23:59".to_string(),
        active: true,
    }
}

fn draft_from(product: &Product) -> CreateProduct {
    CreateProduct {
        supplier_id: product.supplier_id,
        name: product.name.clone(),
        airport: product.airport.clone(),
        service_type: product.service_type,
        daily_rate: product.daily_rate,
        opens_at: product.opens_at.clone(),
        closes_at: product.closes_at.clone(),
        active: product.active,
    }
}

#[derive(Clone, PartialEq)]
enum Editing {
    None,
    Creating,
    Row(ProductId),
    ConfirmingDelete(Product),
}

#[function_component]
pub fn ProductsPage() -> Html {
    let toast = use_toast();

    let query = use_state(ProductListQuery::default);
    let list = use_list(
        (*query).clone(),
        |query: ProductListQuery| async move {
            get_api_client().list_products(&query).await
        },
    );

    // Supplier dropdown for the editor
    let suppliers = use_list(
        SupplierListQuery {
            limit: 200,
            ..SupplierListQuery::default()
        },
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
            query.set(ProductListQuery {
                search: Some(value).filter(|s| !s.is_empty()),
                page: 1,
                ..(*query).clone()
            });
        })
    };

    let on_service_filter = {
        let query = query.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let service_type =
                [ServiceType::ParkAndRide, ServiceType::MeetAndGreet]
                    .into_iter()
                    .find(|s| s.to_string() == select.value());
            query.set(ProductListQuery {
                service_type,
                page: 1,
                ..(*query).clone()
            });
        })
    };

    let on_page_change = {
        let query = query.clone();
        Callback::from(move |page: i64| {
            query.set(ProductListQuery {
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
                        api_client.create_product(&details).await
                    }
                    Editing::Row(id) => {
                        api_client.update_product(&id, &details).await
                    }
                    Editing::None | Editing::ConfirmingDelete(_) => {
                        is_saving.set(false);
                        return;
                    }
                };
                match result {
                    Ok(product) => {
                        toast.success(format!("{} saved.", product.name));
                        editing.set(Editing::None);
                        refetch.emit(());
                    }
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
            let Editing::ConfirmingDelete(product) = (*editing).clone()
            else {
                return;
            };
            let editing = editing.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();
            yew::platform::spawn_local(async move {
                match get_api_client().delete_product(&product.id).await {
                    Ok(outcome) => {
                        let message = outcome
                            .message
                            .unwrap_or_else(|| "Product deleted.".into());
                        toast.success(message);
                        refetch.emit(());
                    }
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
                      update: fn(&mut CreateProduct, String)| {
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
        let on_supplier = {
            let draft = draft.clone();
            Callback::from(move |e: Event| {
                let select: web_sys::HtmlSelectElement =
                    e.target_unchecked_into();
                if let Ok(id) = select.value().parse::<i64>() {
                    let mut next = (*draft).clone();
                    next.supplier_id = SupplierId(id);
                    draft.set(next);
                }
            })
        };
        let on_service_type = {
            let draft = draft.clone();
            Callback::from(move |e: Event| {
                let select: web_sys::HtmlSelectElement =
                    e.target_unchecked_into();
                let service_type =
                    [ServiceType::ParkAndRide, ServiceType::MeetAndGreet]
                        .into_iter()
                        .find(|s| s.to_string() == select.value());
                if let Some(service_type) = service_type {
                    let mut next = (*draft).clone();
                    next.service_type = service_type;
                    draft.set(next);
                }
            })
        };
        let on_rate = {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement =
                    e.target_unchecked_into();
                let mut next = (*draft).clone();
                next.daily_rate = parse_amount(&input.value());
                draft.set(next);
            })
        };
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
                    <label class="block text-sm text-neutral-600 \
                                  dark:text-neutral-400">
                        {"Supplier"}
                        <select class={INPUT_CLASS} onchange={on_supplier}>
                            <option value="0"
                                selected={draft.supplier_id
                                    == SupplierId(0)}>
                                {"Select a supplier"}
                            </option>
                            {for suppliers.state.rows.iter().map(
                                |supplier| html! {
                                    <option
                                        value={supplier.id.0.to_string()}
                                        selected={draft.supplier_id
                                            == supplier.id}
                                    >
                                        {format!(
                                            "{} ({})",
                                            supplier.name,
                                            supplier.airport,
                                        )}
                                    </option>
                                },
                            )}
                        </select>
                    </label>
                    <label class="block text-sm text-neutral-600 \
                                  dark:text-neutral-400">
                        {"Service type"}
                        <select
                            class={INPUT_CLASS}
                            onchange={on_service_type}
                        >
                            {for [
                                ServiceType::ParkAndRide,
                                ServiceType::MeetAndGreet,
                            ].iter().map(|service| html! {
                                <option
                                    selected={draft.service_type
                                        == *service}
                                >
                                    {service.to_string()}
                                </option>
                            })}
                        </select>
                    </label>
                    {text_field("Name", draft.name.clone(),
                        |d, v| d.name = v)}
                    {text_field("Airport", draft.airport.clone(),
                        |d, v| d.airport = v.to_uppercase())}
                    <label class="block text-sm text-neutral-600 \
                                  dark:text-neutral-400">
                        {"Daily rate"}
                        <input
                            type="text"
                            class={INPUT_CLASS}
                            value={draft.daily_rate.to_string()}
                            oninput={on_rate}
                        />
                    </label>
                    {text_field("Opens at", draft.opens_at.clone(),
                        |d, v| d.opens_at = v)}
                    {text_field("Closes at", draft.closes_at.clone(),
                        |d, v| d.closes_at = v)}
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
                    {"Products"}
                </h1>
                <button
                    onclick={open_create}
                    class="px-3 py-2 text-sm font-medium text-white \
                           bg-blue-600 hover:bg-blue-700 rounded-md"
                >
                    {"New product"}
                </button>
            </div>

            <div class="flex gap-3">
                <input
                    type="text"
                    class="px-3 py-2 text-sm border border-neutral-300 \
                           dark:border-neutral-600 rounded-md bg-white \
                           dark:bg-neutral-700 text-neutral-900 \
                           dark:text-neutral-100"
                    placeholder="Search products..."
                    value={query.search.clone().unwrap_or_default()}
                    oninput={on_search}
                />
                <select
                    class="px-3 py-2 text-sm border border-neutral-300 \
                           dark:border-neutral-600 rounded-md bg-white \
                           dark:bg-neutral-700 text-neutral-900 \
                           dark:text-neutral-100"
                    onchange={on_service_filter}
                >
                    <option selected={query.service_type.is_none()}>
                        {"All services"}
                    </option>
                    {for [
                        ServiceType::ParkAndRide,
                        ServiceType::MeetAndGreet,
                    ].iter().map(|service| html! {
                        <option
                            selected={query.service_type == Some(*service)}
                        >
                            {service.to_string()}
                        </option>
                    })}
                </select>
            </div>

            {editor}

            <div class="overflow-x-auto border border-neutral-200 \
                        dark:border-neutral-700 rounded-lg">
                <table class="min-w-full divide-y divide-neutral-200 \
                              dark:divide-neutral-700">
                    <thead class="bg-neutral-50 dark:bg-neutral-800">
                        <tr>
                            <th class={header_class}>{"Name"}</th>
                            <th class={header_class}>{"Airport"}</th>
                            <th class={header_class}>{"Service"}</th>
                            <th class={header_class}>{"Daily rate"}</th>
                            <th class={header_class}>{"Hours"}</th>
                            <th class={header_class}>{"Active"}</th>
                            <th class={header_class}>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-neutral-200 \
                                  dark:divide-neutral-700">
                        {for list.state.rows.iter().map(|product| {
                            let on_edit = {
                                let editing = editing.clone();
                                let draft = draft.clone();
                                let product = product.clone();
                                Callback::from(move |_: MouseEvent| {
                                    draft.set(draft_from(&product));
                                    editing.set(Editing::Row(product.id));
                                })
                            };
                            let on_delete = {
                                let editing = editing.clone();
                                let product = product.clone();
                                Callback::from(move |_: MouseEvent| {
                                    editing.set(Editing::ConfirmingDelete(
                                        product.clone(),
                                    ));
                                })
                            };
                            html! {
                                <tr key={product.id.0}>
                                    <td class={cell_class}>
                                        {&product.name}
                                    </td>
                                    <td class={cell_class}>
                                        {&product.airport}
                                    </td>
                                    <td class={cell_class}>
                                        {product.service_type.to_string()}
                                    </td>
                                    <td class={cell_class}>
                                        {format_amount(product.daily_rate)}
                                    </td>
                                    <td class={cell_class}>
                                        {format!(
                                            "{} - {}",
                                            product.opens_at,
                                            product.closes_at,
                                        )}
                                    </td>
                                    <td class={cell_class}>
                                        {if product.active {
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

            if let Editing::ConfirmingDelete(product) = (*editing).clone() {
                <ConfirmationModal
                    title="Delete product"
                    message={format!("Delete {}?", product.name)}
                    confirm_text="Delete"
                    on_confirm={on_delete_confirm}
                    on_close={close_editor.clone()}
                />
            }
        </div>
    }
}
