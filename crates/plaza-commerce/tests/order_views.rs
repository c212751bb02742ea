//! End-to-end order aggregation flow: catalog + placed orders in, buyer and
//! seller histories out, with totals agreeing between the two views.

use plaza_commerce::prelude::*;

fn listing(id: &str, seller: &str, title: &str, price_cents: i64) -> Product {
    let mut p = Product::new(
        SellerId::new(seller),
        title,
        Money::new(price_cents, Currency::USD),
    );
    p.id = ProductId::new(id);
    p
}

fn entry(id: &str, quantity: i64, price_cents: i64) -> CartEntry {
    CartEntry::new(
        ProductId::new(id),
        quantity,
        Money::new(price_cents, Currency::USD),
    )
    .unwrap()
}

fn marketplace() -> InMemoryCatalog {
    [
        listing("desk", "woodworks", "Walnut desk", 12900),
        listing("lamp", "glasshaus", "Brass lamp", 4500),
        listing("shelf", "woodworks", "Oak shelf", 7200),
        listing("vase", "glasshaus", "Blue vase", 3100),
    ]
    .into_iter()
    .collect()
}

fn place_order(buyer: &str, entries: Vec<CartEntry>, catalog: &InMemoryCatalog) -> Order {
    let cart = CartSnapshot::from_entries(entries, Currency::USD).unwrap();
    let sellers: Vec<SellerId> = cart
        .seller_partition(catalog)
        .unwrap()
        .into_groups()
        .into_iter()
        .map(|g| g.seller)
        .collect();
    Order::new(
        UserId::new(buyer),
        AddressId::new(format!("addr-{}", buyer)),
        sellers,
        cart,
    )
}

#[test]
fn buyer_and_seller_views_agree_on_value() {
    let catalog = marketplace();
    let orders = vec![
        place_order(
            "ada",
            vec![entry("desk", 1, 12900), entry("lamp", 2, 4500)],
            &catalog,
        ),
        place_order(
            "grace",
            vec![entry("shelf", 1, 7200), entry("vase", 1, 3100)],
            &catalog,
        ),
    ];

    let buyer_views = buyer_order_history(&orders, &catalog).unwrap();
    let buyer_total: i64 = buyer_views.iter().map(|v| v.total.amount_cents).sum();

    let mut seller_total = 0;
    for seller in ["woodworks", "glasshaus"] {
        let views = seller_sales_history(&orders, &SellerId::new(seller), &catalog).unwrap();
        seller_total += views.iter().map(|v| v.subtotal.amount_cents).sum::<i64>();
    }

    assert_eq!(buyer_total, seller_total);
    assert_eq!(buyer_total, 12900 + 2 * 4500 + 7200 + 3100);
}

#[test]
fn seller_sees_only_orders_with_their_items() {
    let catalog = marketplace();
    let orders = vec![
        place_order("ada", vec![entry("desk", 1, 12900)], &catalog),
        place_order("grace", vec![entry("vase", 1, 3100)], &catalog),
    ];

    let woodworks = seller_sales_history(&orders, &SellerId::new("woodworks"), &catalog).unwrap();
    assert_eq!(woodworks.len(), 1);
    assert_eq!(woodworks[0].buyer_id, UserId::new("ada"));
    assert_eq!(woodworks[0].items.len(), 1);
    assert_eq!(woodworks[0].items[0].title, "Walnut desk");

    let outsider = seller_sales_history(&orders, &SellerId::new("potterybarn"), &catalog).unwrap();
    assert!(outsider.is_empty());
}

#[test]
fn mixed_cart_partitions_without_loss() {
    let catalog = marketplace();
    let order = place_order(
        "ada",
        vec![
            entry("desk", 2, 12900),
            entry("vase", 1, 3100),
            entry("shelf", 1, 7200),
        ],
        &catalog,
    );

    let flat = order.cart.line_items(&catalog).unwrap();
    let titles: Vec<&str> = flat.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Walnut desk", "Blue vase", "Oak shelf"]);

    let partition = order.cart.seller_partition(&catalog).unwrap();
    let groups = partition.groups();
    assert_eq!(groups.len(), 2);
    // First-seen order: woodworks (desk) before glasshaus (vase).
    assert_eq!(groups[0].seller, SellerId::new("woodworks"));
    assert_eq!(groups[0].subtotal.amount_cents, 2 * 12900 + 7200);
    assert_eq!(groups[1].seller, SellerId::new("glasshaus"));
    assert_eq!(groups[1].subtotal.amount_cents, 3100);

    let regrouped: usize = groups.iter().map(|g| g.items.len()).sum();
    assert_eq!(regrouped, flat.len());
}

#[test]
fn missing_listing_fails_the_whole_order_view() {
    let catalog = marketplace();
    let order = place_order(
        "ada",
        vec![entry("desk", 1, 12900), entry("lamp", 1, 4500)],
        &catalog,
    );

    // The lamp listing disappears between placement and render.
    let partial: InMemoryCatalog = [listing("desk", "woodworks", "Walnut desk", 12900)]
        .into_iter()
        .collect();

    let orders = vec![order];
    assert!(matches!(
        buyer_order_history(&orders, &partial),
        Err(CommerceError::ProductResolution(_))
    ));
    assert!(matches!(
        seller_sales_history(&orders, &SellerId::new("woodworks"), &partial),
        Err(CommerceError::ProductResolution(_))
    ));
}
