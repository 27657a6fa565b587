//! CLI walkthrough of the Meridian wire format lifecycle.
//!
//! Builds a transfer, signs it, dumps the exact bytes, decodes them back,
//! then assembles an aggregate with its Merkle binding and a cosignature.
//! The output uses ANSI escape codes for colored, storytelling-style
//! terminal rendering.
//!
//! Run with:
//!   cargo run --example demo

use meridian_protocol::codec::{WireDeserialize, WireSerialize};
use meridian_protocol::config::network_name;
use meridian_protocol::crypto::{hash256, Keypair};
use meridian_protocol::model::{
    Amount, Deadline, Mosaic, MosaicId, NetworkType, UnresolvedAddress,
};
use meridian_protocol::transaction::{
    cosign, sign_transaction, transaction_hash, verify_transaction_signature, AggregateBody,
    Transaction, TransactionBody, TransactionBuilder, TransferBody,
};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

fn heading(text: &str) {
    println!("\n{BOLD}{CYAN}== {text} =={RESET}");
}

fn field(name: &str, value: impl std::fmt::Display) {
    println!("  {DIM}{name:<20}{RESET}{value}");
}

fn hex_dump(bytes: &[u8]) {
    for (i, chunk) in bytes.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        println!("  {DIM}{:04x}{RESET}  {}", i * 16, hex.join(" "));
    }
}

fn main() {
    let generation_hash = hash256(b"meridian devnet generation hash");

    heading("1. Accounts");
    let alice = Keypair::generate();
    let bob_address = UnresolvedAddress([0xB0; 24]);
    field("alice (signer)", alice.public_key());
    field("bob (recipient)", bob_address.to_base58());

    heading("2. Build an unsigned transfer");
    let body = TransferBody::new(
        bob_address,
        vec![Mosaic::new(MosaicId(0x6BED_913F), Amount(1_000_000))],
        b"thanks for lunch".to_vec(),
    )
    .expect("transfer body");
    let mut tx = TransactionBuilder::new(NetworkType::DEVNET)
        .body(TransactionBody::Transfer(body))
        .max_fee(Amount(2_000))
        .deadline(Deadline(1_750_000_000_000))
        .build()
        .expect("builder");
    field("network", network_name(tx.network.0));
    field("wire size", format!("{} bytes", tx.wire_size()));
    field("signature", format!("{DIM}(all zeros -- unsigned){RESET}"));

    heading("3. Sign and serialize");
    sign_transaction(&mut tx, &alice, &generation_hash);
    let bytes = tx.to_wire_bytes();
    field("signature", tx.signature);
    field("tx hash", transaction_hash(&tx, &generation_hash));
    println!("\n  {BOLD}exact wire bytes:{RESET}");
    hex_dump(&bytes);

    heading("4. Decode and verify");
    let decoded = Transaction::from_wire_bytes(&bytes).expect("round trip");
    field("equal to original", decoded == tx);
    field(
        "signature valid",
        verify_transaction_signature(&decoded, &generation_hash),
    );

    heading("5. Aggregate with Merkle binding");
    let inner = vec![
        tx.to_embedded().expect("embeddable"),
        tx.to_embedded().expect("embeddable"),
    ];
    let aggregate_body = AggregateBody::new(inner, vec![]);
    field("inner transactions", aggregate_body.transactions.len());
    field("payload size", format!("{} bytes (8-aligned)", aggregate_body.payload_size()));
    field("transactions hash", aggregate_body.transactions_hash);

    let mut aggregate = TransactionBuilder::new(NetworkType::DEVNET)
        .body(TransactionBody::AggregateComplete(aggregate_body))
        .max_fee(Amount(50_000))
        .deadline(Deadline(1_750_000_000_000))
        .build()
        .expect("builder");
    sign_transaction(&mut aggregate, &alice, &generation_hash);

    let carol = Keypair::generate();
    let announced = transaction_hash(&aggregate, &generation_hash);
    let cosignature = cosign(&carol, &announced);
    if let TransactionBody::AggregateComplete(ref mut agg) = aggregate.body {
        agg.cosignatures.push(cosignature);
    }
    field("cosigner", carol.public_key());
    field("aggregate size", format!("{} bytes", aggregate.wire_size()));

    let aggregate_bytes = aggregate.to_wire_bytes();
    let aggregate_decoded = Transaction::from_wire_bytes(&aggregate_bytes).expect("round trip");
    field("aggregate round trip", aggregate_decoded == aggregate);

    println!("\n{GREEN}{BOLD}done.{RESET} {YELLOW}every byte accounted for.{RESET}");
}
