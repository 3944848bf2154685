/// Menu item validation errors.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum MenuItemError {
    #[error("menu_item.name_empty")]
    NameEmpty,
    #[error("menu_item.price_invalid")]
    PriceInvalid,
    #[error("menu_item.discount_invalid")]
    DiscountInvalid,
    #[error("menu_item.rating_out_of_range")]
    RatingOutOfRange,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.unavailable")]
    Unavailable,
}
