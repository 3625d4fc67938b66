use cari_ledger::db::init_db;
use cari_ledger::domain::ordering::is_ledger_ordered;
use cari_ledger::{
    fold, Balances, Currency, Customer, Decimal, NewTransaction, Purity, Repository,
    TransactionKind,
};
use chrono::NaiveDate;
use tempfile::TempDir;

async fn setup() -> (Repository, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    (Repository::new(pool), temp_dir)
}

fn entry(customer: &str, date: &str, kind: TransactionKind, qty: i64, amount: i64) -> NewTransaction {
    NewTransaction {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        customer: Customer::new(customer),
        description: String::new(),
        kind,
        purity: Purity::Pure,
        quantity: Decimal::from(qty),
        unit: "gr".to_string(),
        currency: Some(Currency::Usd),
        amount: Decimal::from(amount),
    }
}

#[tokio::test]
async fn transactions_come_back_in_date_then_id_order() {
    let (repo, _tmp) = setup().await;

    let late = repo
        .insert_transaction(&entry("Usta", "2024-03-10", TransactionKind::Sale, 1, 1))
        .await
        .unwrap();
    let early_b = repo
        .insert_transaction(&entry("Usta", "2024-03-01", TransactionKind::Sale, 2, 1))
        .await
        .unwrap();
    let early_c = repo
        .insert_transaction(&entry("Usta", "2024-03-01", TransactionKind::Purchase, 3, 1))
        .await
        .unwrap();

    let txs = repo.query_transactions(&Customer::new("Usta")).await.unwrap();
    let ids: Vec<_> = txs.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![early_b, early_c, late]);
    assert!(is_ledger_ordered(&txs));
}

#[tokio::test]
async fn query_is_scoped_to_one_customer() {
    let (repo, _tmp) = setup().await;
    repo.insert_transactions_batch(&[
        entry("Usta", "2024-01-01", TransactionKind::Sale, 1, 1),
        entry("Kuyumcu", "2024-01-01", TransactionKind::Sale, 1, 1),
        entry("Usta", "2024-01-02", TransactionKind::Payment, 0, 5),
    ])
    .await
    .unwrap();

    let usta = repo.query_transactions(&Customer::new("Usta")).await.unwrap();
    assert_eq!(usta.len(), 2);
    assert!(usta.iter().all(|t| t.customer.as_str() == "Usta"));

    let customers = repo.list_customers().await.unwrap();
    assert_eq!(customers, vec![Customer::new("Kuyumcu"), Customer::new("Usta")]);
}

#[tokio::test]
async fn deleting_a_row_changes_the_next_fold() {
    let (repo, _tmp) = setup().await;
    let customer = Customer::new("Usta");

    repo.insert_transaction(&entry("Usta", "2024-01-01", TransactionKind::Sale, 10, 5))
        .await
        .unwrap();
    let purchase = repo
        .insert_transaction(&entry("Usta", "2024-01-02", TransactionKind::Purchase, 4, 5))
        .await
        .unwrap();

    let before = fold(Balances::zero(), &repo.query_transactions(&customer).await.unwrap());
    assert_eq!(before.last().unwrap().balances.weight, Decimal::from(6));

    assert!(repo.delete_transaction(purchase).await.unwrap());
    assert!(!repo.delete_transaction(purchase).await.unwrap());

    let after = fold(Balances::zero(), &repo.query_transactions(&customer).await.unwrap());
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].balances.weight, Decimal::from(10));
    assert_eq!(after[0].balances.usd, Decimal::from(50));
}

#[tokio::test]
async fn empty_batch_is_a_no_op() {
    let (repo, _tmp) = setup().await;
    assert_eq!(repo.insert_transactions_batch(&[]).await.unwrap(), 0);
    assert!(repo.list_customers().await.unwrap().is_empty());
}
