//! File-based ingestion through the document adapters.

use std::fs;
use std::path::Path;

use pricelist_ingest::{
    DocumentError, IngestError, ingest_global, ingest_supplier, list_documents, open_document,
};
use pricelist_model::NO_SUPPLIER_BUCKET;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write file");
}

#[test]
fn ingests_every_price_list_in_folder_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(
        dir.path(),
        "Beta Distribuidora.csv",
        "PRODUTO,QTD,PREÇO\nArroz,5 kg,\"20,50\"\nCafe,500 g,\"R$ 14,90\"\n",
    );
    write(
        dir.path(),
        "Alfa Atacado.csv",
        "PRODUTO,QTD,PREÇO\nArroz,5 kg,19.9\nCafe,500 g,sob consulta\nFeijao,1 kg,\nSal,1 kg,\"2,15\"\n",
    );
    write(dir.path(), "relatorio.csv", "A,B,C,D,E,F\n1,2,3,4,5,6\n");

    let mut suppliers = Vec::new();
    let mut skipped = Vec::new();
    for path in list_documents(dir.path()).expect("list documents") {
        let doc = open_document(&path).expect("open document");
        match ingest_supplier(doc.as_ref()).expect("ingest") {
            Some(supplier) => suppliers.push(supplier),
            None => skipped.push(path),
        }
    }

    let names: Vec<&str> = suppliers.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Alfa Atacado", "Beta Distribuidora"]);
    assert_eq!(skipped.len(), 1);

    // "Feijao" has no price cell at all and is dropped as an incomplete row.
    let alfa = &suppliers[0];
    assert_eq!(alfa.product_count(), 3);
    assert!(alfa.product("Feijao").is_none());
    assert_eq!(alfa.total_priced_products(), 2);
    assert_eq!(alfa.price_of("Sal"), Some(2.15));

    let beta = &suppliers[1];
    assert_eq!(beta.price_of("Cafe"), Some(14.9));
}

#[test]
fn regroups_consolidated_csv() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(
        dir.path(),
        "resultado_geral.csv",
        "PRODUTO,QTD,Alfa,Beta,,,Melhor Preço,Fornecedor\n\
         Arroz,5 kg,19.9,20.5,,,19.9,Alfa\n\
         Cafe,500 g,,14.9,,,14.9,Beta\n\
         Sal,1 kg,,,,,,sem_fornecedor\n",
    );

    let doc = open_document(&dir.path().join("resultado_geral.csv")).expect("open");
    let grouping = ingest_global(doc.as_ref()).expect("regroup");

    assert_eq!(grouping.supplier_count(), 2);
    assert_eq!(grouping.bucket_of("Arroz"), Some("Alfa"));
    assert_eq!(grouping.bucket_of("Cafe"), Some("Beta"));
    assert_eq!(grouping.bucket_of("Sal"), Some(NO_SUPPLIER_BUCKET));
}

#[test]
fn missing_document_is_a_read_failure() {
    let result = open_document(Path::new("/nonexistent/Fornecedor.csv"));
    assert!(matches!(result, Err(DocumentError::NotFound { .. })));

    let result = list_documents(Path::new("/nonexistent"));
    assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
}
