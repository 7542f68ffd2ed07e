use yew::prelude::*;

/// Lifecycle of the owned-shop fetch. The dashboard renders strictly from
/// this value, so the list view cannot appear before the fetch resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopListState {
    Idle,
    Loading,
    Loaded(Vec<String>),
    Failed(String),
}

impl ShopListState {
    /// The shops to render. Every non-loaded state is an empty sequence.
    pub fn shops(&self) -> &[String] {
        match self {
            ShopListState::Loaded(shops) => shops,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ShopListState::Loading)
    }
}

#[derive(Properties, PartialEq)]
pub struct ShopListProps {
    pub shops: Vec<String>,
    pub on_select: Callback<String>,
}

#[function_component(ShopList)]
pub fn shop_list(props: &ShopListProps) -> Html {
    if props.shops.is_empty() {
        return html! {
            <div class="empty-state">
                <p>{ "No shops found." }</p>
            </div>
        };
    }

    html! {
        <ul class="shop-list">
            { for props.shops.iter().map(|shop| {
                let on_select = props.on_select.clone();
                let name = shop.clone();
                let onclick = Callback::from(move |_| on_select.emit(name.clone()));

                html! {
                    <li class="shop-item" {onclick}>{ shop }</li>
                }
            })}
        </ul>
    }
}
