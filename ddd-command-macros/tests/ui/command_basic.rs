use ddd_command::command::Command;
use ddd_command::command_output::{CommandOutput, OutputMarker};

#[derive(Debug, ddd_command::Command)]
struct CreateUser {
    name: String,
}

#[derive(Debug, ddd_command::Command)]
#[command(name = "orders.place", output = Option<Receipt>)]
struct PlaceOrder;

#[derive(Debug, ddd_command::CommandOutput)]
struct Receipt;

#[derive(Debug, ddd_command::CommandOutput)]
#[command_output(name = "Summary")]
struct ReportSummaryV2;

#[derive(Debug, ddd_command::Command)]
#[command(output = Vec<T>)]
struct Batch<T: std::fmt::Debug + Send + Sync + 'static> {
    items: Vec<T>,
}

fn output_of<C: Command>(_: &C) -> &'static str {
    std::any::type_name::<C::Output>()
}

fn main() {
    let cmd = CreateUser { name: "alice".into() };
    let _ = &cmd.name;
    assert_eq!(CreateUser::NAME, "CreateUser");
    assert_eq!(output_of(&cmd), "()");

    assert_eq!(PlaceOrder::NAME, "orders.place");
    assert_eq!(Receipt.marker(), OutputMarker::Named("Receipt"));
    assert_eq!(ReportSummaryV2.marker().to_string(), "Summary");

    let batch = Batch { items: vec![1u8] };
    let _ = &batch.items;
    assert_eq!(<Batch<u8> as Command>::NAME, "Batch");
}
