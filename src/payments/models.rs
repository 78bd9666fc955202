//! Typed request sections
//!
//! Convenience structs for the nested objects of an access code request. Each
//! converts into a [`BodyObject`] holding only the fields that were set, in the
//! gateway's documented field order. Requests accept any flat key/value iterator
//! too, so these are optional.

use crate::payments::body::BodyObject;

/// Customer details sent under `Customer`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    /// Token customer to charge or update (token methods only)
    pub token_customer_id: Option<String>,
    /// Merchant's own reference for the customer
    pub reference: Option<String>,
    /// Mr., Ms., Mrs., Miss, Dr., Sir. or Prof.
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub job_description: Option<String>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    /// Two letter ISO 3166-1 country code, lower case
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub comments: Option<String>,
    pub fax: Option<String>,
    pub url: Option<String>,
}

impl From<Customer> for BodyObject {
    fn from(customer: Customer) -> Self {
        let mut object = BodyObject::new();
        object.insert_opt("TokenCustomerID", customer.token_customer_id);
        object.insert_opt("Reference", customer.reference);
        object.insert_opt("Title", customer.title);
        object.insert_opt("FirstName", customer.first_name);
        object.insert_opt("LastName", customer.last_name);
        object.insert_opt("CompanyName", customer.company_name);
        object.insert_opt("JobDescription", customer.job_description);
        object.insert_opt("Street1", customer.street1);
        object.insert_opt("Street2", customer.street2);
        object.insert_opt("City", customer.city);
        object.insert_opt("State", customer.state);
        object.insert_opt("PostalCode", customer.postal_code);
        object.insert_opt("Country", customer.country);
        object.insert_opt("Email", customer.email);
        object.insert_opt("Phone", customer.phone);
        object.insert_opt("Mobile", customer.mobile);
        object.insert_opt("Comments", customer.comments);
        object.insert_opt("Fax", customer.fax);
        object.insert_opt("Url", customer.url);
        object
    }
}

/// Delivery details sent under `ShippingAddress`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingAddress {
    /// Unknown, LowCost, DesignatedByCustomer, International, Military, NextDay,
    /// StorePickup, TwoDayService, ThreeDayService or Other
    pub shipping_method: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
}

impl From<ShippingAddress> for BodyObject {
    fn from(address: ShippingAddress) -> Self {
        let mut object = BodyObject::new();
        object.insert_opt("ShippingMethod", address.shipping_method);
        object.insert_opt("FirstName", address.first_name);
        object.insert_opt("LastName", address.last_name);
        object.insert_opt("Street1", address.street1);
        object.insert_opt("Street2", address.street2);
        object.insert_opt("City", address.city);
        object.insert_opt("State", address.state);
        object.insert_opt("Country", address.country);
        object.insert_opt("PostalCode", address.postal_code);
        object.insert_opt("Email", address.email);
        object.insert_opt("Phone", address.phone);
        object.insert_opt("Fax", address.fax);
        object
    }
}

/// Amount and invoice details sent under `Payment`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payment {
    /// Amount in the lowest denomination, e.g. 1234 for $12.34
    pub total_amount: i64,
    pub invoice_number: Option<String>,
    pub invoice_description: Option<String>,
    pub invoice_reference: Option<String>,
    /// ISO 4217 three character currency code
    pub currency_code: Option<String>,
}

impl Payment {
    pub fn new(total_amount: i64) -> Self {
        Self {
            total_amount,
            ..Default::default()
        }
    }
}

impl From<Payment> for BodyObject {
    fn from(payment: Payment) -> Self {
        let mut object = BodyObject::new();
        object.insert("TotalAmount", payment.total_amount);
        object.insert_opt("InvoiceNumber", payment.invoice_number);
        object.insert_opt("InvoiceDescription", payment.invoice_description);
        object.insert_opt("InvoiceReference", payment.invoice_reference);
        object.insert_opt("CurrencyCode", payment.currency_code);
        object
    }
}

/// One purchased product, used for fraud scoring and order display
///
/// Amounts are in the lowest denomination. Totals are checked by the gateway,
/// not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItem {
    pub sku: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub unit_cost: Option<i64>,
    pub tax: Option<i64>,
    pub total: Option<i64>,
}

impl From<LineItem> for BodyObject {
    fn from(item: LineItem) -> Self {
        let mut object = BodyObject::new();
        object.insert_opt("SKU", item.sku);
        object.insert_opt("Description", item.description);
        object.insert_opt("Quantity", item.quantity);
        object.insert_opt("UnitCost", item.unit_cost);
        object.insert_opt("Tax", item.tax);
        object.insert_opt("Total", item.total);
        object
    }
}
