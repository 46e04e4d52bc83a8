#![cfg(feature = "reconciliation")]

use konto::reconciliation::*;
use rust_decimal_macros::dec;

fn record(pairs: &[(&str, WidgetValue)]) -> WidgetRecord {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn sample() -> DataForReconciliationWidget {
    DataForReconciliationWidget {
        customers: vec![record(&[
            ("partner_id", WidgetValue::from(7)),
            ("partner_name", WidgetValue::from("Deco Addict")),
            ("reconciliation_proposition", WidgetValue::from(true)),
        ])],
        suppliers: vec![record(&[
            ("partner_id", WidgetValue::from(12)),
            ("partner_name", WidgetValue::from("Wood Corner")),
            ("balance", WidgetValue::from(dec!(-120.5))),
        ])],
        accounts: vec![record(&[
            ("account_id", WidgetValue::from(101200)),
            ("account_code", WidgetValue::from("101200")),
            (
                "currency",
                WidgetValue::Map(record(&[
                    ("id", WidgetValue::from(1)),
                    ("name", WidgetValue::from("EUR")),
                ])),
            ),
        ])],
    }
}

#[test]
fn widget_top_level_keys() {
    let value = serde_json::to_value(sample()).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 3);
    assert!(obj["customers"].is_array());
    assert!(obj["suppliers"].is_array());
    assert!(obj["accounts"].is_array());
}

#[test]
fn widget_snapshot() {
    let json = serde_json::to_string_pretty(&sample()).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "customers": [
        {
          "partner_id": 7,
          "partner_name": "Deco Addict",
          "reconciliation_proposition": true
        }
      ],
      "suppliers": [
        {
          "balance": -120.5,
          "partner_id": 12,
          "partner_name": "Wood Corner"
        }
      ],
      "accounts": [
        {
          "account_code": "101200",
          "account_id": 101200,
          "currency": {
            "id": 1,
            "name": "EUR"
          }
        }
      ]
    }
    "#);
}

#[test]
fn widget_roundtrip_preserves_record_order() {
    let mut data = sample();
    data.customers.push(record(&[("partner_id", WidgetValue::from(8))]));
    data.customers.push(record(&[("partner_id", WidgetValue::from(3))]));
    let json = serde_json::to_string(&data).unwrap();
    let back: DataForReconciliationWidget = serde_json::from_str(&json).unwrap();
    assert_eq!(back, data);
    let ids: Vec<_> = back
        .customers
        .iter()
        .map(|r| r["partner_id"].as_decimal().unwrap())
        .collect();
    assert_eq!(ids, [dec!(7), dec!(8), dec!(3)]);
}

#[test]
fn widget_from_ui_payload() {
    let data: DataForReconciliationWidget = serde_json::from_str(
        r#"{
            "customers": [{"partner_id": 7, "mv_lines": {"count": 2}}],
            "suppliers": [],
            "accounts": [{"account_id": 5, "account_name": "Bank"}]
        }"#,
    )
    .unwrap();
    assert_eq!(data.customers.len(), 1);
    assert!(data.suppliers.is_empty());
    let mv = data.customers[0]["mv_lines"].as_map().unwrap();
    assert_eq!(mv["count"].as_decimal(), Some(dec!(2)));
    assert_eq!(data.accounts[0]["account_name"].as_str(), Some("Bank"));
}

#[test]
fn widget_rejects_arrays_inside_records() {
    let res = serde_json::from_str::<DataForReconciliationWidget>(
        r#"{"customers": [{"ids": [1, 2]}], "suppliers": [], "accounts": []}"#,
    );
    assert!(res.is_err());
}

#[test]
fn widget_numbers_survive_roundtrip_exactly() {
    let data = DataForReconciliationWidget {
        customers: vec![record(&[(
            "balance",
            WidgetValue::from(dec!(1234567.123456789012345)),
        )])],
        suppliers: vec![record(&[("partner_id", WidgetValue::Number(u64::MAX.into()))])],
        accounts: vec![record(&[(
            "rate",
            WidgetValue::from(dec!(0.0000000000000000000000000001)),
        )])],
    };
    let json = serde_json::to_string(&data).unwrap();
    assert!(json.contains(r#""balance":1234567.123456789012345"#));
    assert!(json.contains(r#""partner_id":18446744073709551615"#));
    let back: DataForReconciliationWidget = serde_json::from_str(&json).unwrap();
    assert_eq!(back, data);
}
