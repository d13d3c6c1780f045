//! Application components.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::prelude::*;

/// Catalog bundled at build time.
const CATALOG_JSON: &str = include_str!("../../../data/products.json");

/// Currency the bundled catalog is priced in.
const CATALOG_CURRENCY: Currency = Currency::USD;

// ============================================================================
// App Component
// ============================================================================

/// Root component. Owns the catalog feed and the cart.
#[component]
pub fn App() -> impl IntoView {
    let feed = RwSignal::new(CatalogFeed::default());
    let cart = RwSignal::new(CartStore::new(CATALOG_CURRENCY));

    // One fetch per session; the feed settles once and never reloads.
    spawn_local(async move {
        let settled = match StaticSource::from_json(CATALOG_JSON, CATALOG_CURRENCY) {
            Ok(source) => CatalogFeed::load(&source).await,
            Err(e) => {
                let mut failed = CatalogFeed::Loading;
                failed.settle(Err(e));
                failed
            }
        };
        feed.set(settled);
    });

    view! {
        <Header cart=cart/>
        <main>
            {move || feed.with(|feed| match feed {
                CatalogFeed::Loading => view! {
                    <div class="loading">"Loading products..."</div>
                    <ProductGridSkeleton/>
                }.into_any(),
                CatalogFeed::Failed(message) => view! {
                    <div class="error">"Error: " {message.clone()}</div>
                }.into_any(),
                CatalogFeed::Ready(products) => view! {
                    <Storefront products=products.clone() cart=cart/>
                }.into_any(),
            })}
        </main>
        <Footer/>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header(cart: RwSignal<CartStore>) -> impl IntoView {
    let item_count = move || cart.with(|c| c.total_items()).to_string();

    view! {
        <header>
            <h1>"Product Catalog"</h1>
            <span class="cart-badge">"Cart: " {item_count}</span>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Prices in " {CATALOG_CURRENCY.code()} ". Cart contents last for this session only."</p>
        </footer>
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Catalog controls, product grid and cart for a loaded catalog.
#[component]
fn Storefront(products: Vec<Product>, cart: RwSignal<CartStore>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(CategoryFilter::All);
    let sort = RwSignal::new(SortOrder::Default);

    let category_names = categories(&products);
    let total = products.len();

    let grid = move || {
        let filter = ViewFilter {
            query: query.get(),
            category: category.get(),
            sort: sort.get(),
        };
        let visible = derive_view(&products, &filter);
        let count = format!("{} of {} products", visible.len(), total);

        if visible.is_empty() {
            return view! {
                <p class="count">{count}</p>
                <p class="empty">"No products match your search."</p>
            }
            .into_any();
        }

        let cards = cart.with(|c| {
            display_all(visible, c)
                .into_iter()
                .map(|d| {
                    view! {
                        <ProductCard
                            product=d.product.clone()
                            price_label=d.price_label()
                            stock_label=d.stock_label()
                            action_label=d.action_label()
                            can_add=d.can_add
                            in_cart=d.quantity_in_cart
                            cart=cart
                        />
                    }
                })
                .collect_view()
        });

        view! {
            <p class="count">{count}</p>
            <div class="products">{cards}</div>
        }
        .into_any()
    };

    view! {
        <div class="storefront">
            <section class="catalog">
                <CatalogControls
                    query=query
                    category=category
                    sort=sort
                    category_names=category_names
                />
                {grid}
            </section>
            <CartPanel cart=cart/>
        </div>
    }
}

/// Search box, category selector and sort selector.
#[component]
fn CatalogControls(
    query: RwSignal<String>,
    category: RwSignal<CategoryFilter>,
    sort: RwSignal<SortOrder>,
    category_names: Vec<String>,
) -> impl IntoView {
    view! {
        <div class="controls">
            <input
                type="search"
                placeholder="Search products..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <select on:change=move |ev| {
                category.set(CategoryFilter::from_token(&event_target_value(&ev)))
            }>
                <option value=CategoryFilter::ALL_TOKEN>"All Categories"</option>
                {category_names
                    .into_iter()
                    .map(|name| view! { <option value=name.clone()>{name}</option> })
                    .collect_view()}
            </select>
            <select on:change=move |ev| sort.set(SortOrder::from_token(&event_target_value(&ev)))>
                {SortOrder::ALL
                    .iter()
                    .map(|s| view! { <option value=s.as_str()>{s.display_name()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn ProductCard(
    product: Product,
    price_label: String,
    stock_label: String,
    action_label: &'static str,
    can_add: bool,
    in_cart: u32,
    cart: RwSignal<CartStore>,
) -> impl IntoView {
    let title = product.title.clone();
    let category = product.category.clone();
    let thumbnail = (!product.thumbnail.is_empty()).then(|| product.thumbnail.clone());
    let on_add = move |_| {
        cart.update(|c| {
            c.add_to_cart(&product);
        });
    };

    view! {
        <div class="product-card">
            {match thumbnail {
                Some(src) => view! { <img src=src alt=title.clone()/> }.into_any(),
                None => view! { <div class="thumbnail-placeholder">"📦"</div> }.into_any(),
            }}
            <div class="product-info">
                <h3>{title.clone()}</h3>
                <p class="category">{category}</p>
                <p class="price">{price_label}</p>
                <p class="stock">{stock_label}</p>
                {(in_cart > 0).then(|| view! { <p class="in-cart">{in_cart} " in cart"</p> })}
                <button class="btn" disabled=!can_add on:click=on_add>
                    {action_label}
                </button>
            </div>
        </div>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartPanel(cart: RwSignal<CartStore>) -> impl IntoView {
    let contents = move || {
        let summary = cart.with(|c| c.summary());
        if summary.is_empty() {
            return view! { <p>"Your cart is empty."</p> }.into_any();
        }

        let total_items = summary.total_items.to_string();
        let total_price = summary.total_price.display();
        let rows = summary
            .lines
            .into_iter()
            .map(|line| {
                let can_increase = cart.with(|c| {
                    c.line(&line.product_id)
                        .map(|l| l.can_increase())
                        .unwrap_or(false)
                });
                view! { <CartRow line=line can_increase=can_increase cart=cart/> }
            })
            .collect_view();

        view! {
            <div class="cart-lines">{rows}</div>
            <div class="cart-total">
                <span>"Total Items: " {total_items}</span>
                <strong>"Total: " {total_price}</strong>
            </div>
            <button class="btn btn-danger" on:click=move |_| cart.update(|c| c.clear())>
                "Clear Cart"
            </button>
        }
        .into_any()
    };

    view! {
        <aside class="cart">
            <h2>"Shopping Cart"</h2>
            {contents}
        </aside>
    }
}

#[component]
fn CartRow(line: LinePricing, can_increase: bool, cart: RwSignal<CartStore>) -> impl IntoView {
    let id = line.product_id;
    let unit = line.unit_price.display();
    let subtotal = line.subtotal.display();

    view! {
        <div class="cart-line">
            <div>
                <strong>{line.title}</strong>
                <p class="muted">{unit} " x " {line.quantity}</p>
            </div>
            <div class="cart-line-actions">
                <button on:click=move |_| cart.update(|c| {
                    c.decrement(&id);
                })>"-"</button>
                <span>{line.quantity}</span>
                <button disabled=!can_increase on:click=move |_| cart.update(|c| {
                    c.increment(&id);
                })>"+"</button>
                <button class="link" on:click=move |_| cart.update(|c| {
                    c.remove_from_cart(&id);
                })>"Remove"</button>
            </div>
            <strong class="subtotal">{subtotal}</strong>
        </div>
    }
}

// ============================================================================
// Skeleton Components (Loading States)
// ============================================================================

#[component]
fn ProductGridSkeleton() -> impl IntoView {
    view! {
        <div class="products">
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
        </div>
    }
}

#[component]
fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="skeleton" style="width: 100%; height: 200px;"></div>
            <div class="product-info">
                <div class="skeleton" style="width: 80%; height: 1.5rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 40%; height: 1.25rem;"></div>
            </div>
        </div>
    }
}
