use std::rc::Rc;

use yew::prelude::*;

use crate::config::MenuConfig;
use crate::render::{compose, FooterView, ItemView, MenuView};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<MenuConfig>,
    /// Local hour (0-23) the footer is computed from.
    pub hour: u8,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let view = compose(&props.config, props.hour);

    html! {
        <div class="container">
            <Header title={view.title} />
            <Menu menu={view.menu} />
            <Footer footer={view.footer} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <h1>{ props.title.clone() }</h1>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    pub menu: MenuView,
}

#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    let body = match &props.menu {
        MenuView::NonEmpty { caption, items } => html! {
            <>
                <p>{ caption.clone() }</p>
                <ul class="pizzas">
                    { for items.iter().map(|item| html! {
                        <Pizza key={item.name.clone()} item={item.clone()} />
                    }) }
                </ul>
            </>
        },
        MenuView::Empty { message } => html! { <p>{ message.clone() }</p> },
    };

    html! {
        <main class="menu">
            <h2>{ "Our Menu" }</h2>
            { body }
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct PizzaProps {
    pub item: ItemView,
}

#[function_component(Pizza)]
pub fn pizza(props: &PizzaProps) -> Html {
    let item = &props.item;

    html! {
        <li class={item.style.class_name()}>
            <img src={item.photo.clone()} alt={item.name.clone()} />
            <div>
                <h3>{ item.name.clone() }</h3>
                <p>{ item.ingredients.clone() }</p>
                <span>{ item.price_label.clone() }</span>
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub footer: FooterView,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let body = match &props.footer {
        FooterView::Order { message, action, .. } => html! {
            <Order message={message.clone()} action={action.clone()} />
        },
        FooterView::Closed { message } => html! { <p>{ message.clone() }</p> },
    };

    html! {
        <footer class="footer">{ body }</footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct OrderProps {
    pub message: String,
    pub action: String,
}

// The button is presentational; orders are not taken here.
#[function_component(Order)]
pub fn order(props: &OrderProps) -> Html {
    html! {
        <div class="order">
            <p>{ props.message.clone() }</p>
            <button class="btn">{ props.action.clone() }</button>
        </div>
    }
}
