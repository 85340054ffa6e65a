use payloads::BookingStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: BookingStatus,
}

#[function_component]
pub fn StatusBadge(props: &StatusBadgeProps) -> Html {
    let color_class = match props.status {
        BookingStatus::Confirmed => {
            "bg-green-100 text-green-800 dark:bg-green-900 \
             dark:text-green-300"
        }
        BookingStatus::Incomplete => {
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 \
             dark:text-yellow-300"
        }
        BookingStatus::Completed => {
            "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300"
        }
        BookingStatus::Cancelled => {
            "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300"
        }
    };

    html! {
        <span class={format!(
            "inline-flex px-2 py-1 text-xs font-medium rounded-full {}",
            color_class
        )}>
            {props.status.to_string()}
        </span>
    }
}
