use crate::Captured;
use osmium::control_state::ControlFlow;
use osmium::input::tokenizer::parse_tokens;
use osmium::process::builtin::Builtin;
use osmium::process::exit::Exit;

#[test]
fn exit_stops_regardless_of_operands() {
    let captured = Captured::new();
    for line in ["exit", "exit 0", "exit 1 two --three", "exit not-a-number"] {
        let tokens = parse_tokens(line).unwrap();
        assert_eq!(Exit::new().call(&tokens, &captured.io), ControlFlow::EXIT);
    }
    assert!(captured.out().is_empty());
    assert!(captured.err().is_empty());
}
