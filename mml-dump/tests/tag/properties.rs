//! Properties that hold for every tree: balanced tags, one tag per node, order, idempotence.

use crate::common::{check_nesting, count_node_tags, node_tags};
use mml_dump::ast::{
    BinaryOperator, Block, FunctionCall, FunctionDefinition, Node, Qualifier, Sequence,
    TypeDescriptor, UnaryOperator,
};
use mml_dump::dump;
use proptest::option;
use proptest::prelude::*;

fn unary_operator() -> impl Strategy<Value = UnaryOperator> {
    prop_oneof![
        Just(UnaryOperator::Neg),
        Just(UnaryOperator::Not),
        Just(UnaryOperator::Identity),
    ]
}

fn binary_operator() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![
        Just(BinaryOperator::Add),
        Just(BinaryOperator::Sub),
        Just(BinaryOperator::Mul),
        Just(BinaryOperator::Div),
        Just(BinaryOperator::Mod),
        Just(BinaryOperator::Lt),
        Just(BinaryOperator::Ge),
        Just(BinaryOperator::Eq),
        Just(BinaryOperator::And),
        Just(BinaryOperator::Or),
    ]
}

fn qualifier() -> impl Strategy<Value = Qualifier> {
    prop_oneof![
        Just(Qualifier::Public),
        Just(Qualifier::Forward),
        Just(Qualifier::Private),
        Just(Qualifier::Foreign),
        Just(Qualifier::Unknown),
    ]
}

fn type_descriptor() -> impl Strategy<Value = TypeDescriptor> {
    let scalar = prop_oneof![
        Just(TypeDescriptor::Int),
        Just(TypeDescriptor::Double),
        Just(TypeDescriptor::String),
        Just(TypeDescriptor::Void),
    ];
    scalar.prop_recursive(3, 12, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(TypeDescriptor::pointer),
            (prop::collection::vec(inner.clone(), 0..3), inner)
                .prop_map(|(inputs, output)| TypeDescriptor::functional(inputs, output)),
        ]
    })
}

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        any::<i32>().prop_map(Node::integer),
        (-1.0e9f64..1.0e9).prop_map(Node::double),
        "[a-z][a-z0-9 ]{0,8}".prop_map(Node::string),
        "[a-z][a-z0-9_]{0,6}".prop_map(Node::variable),
        Just(Node::Nil),
        Just(Node::Null),
        Just(Node::Input),
        (1..4i32).prop_map(|level| Node::Stop { level }),
        (1..4i32).prop_map(|level| Node::Next { level }),
    ]
}

fn tree() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(5, 64, 4, |inner| {
        let sequence = prop::collection::vec(inner.clone(), 0..4).prop_map(Sequence::new);
        let child = inner.clone().prop_map(Box::new);

        let expressions = prop_oneof![
            (unary_operator(), inner.clone()).prop_map(|(op, arg)| Node::unary(op, arg)),
            (binary_operator(), inner.clone(), inner.clone())
                .prop_map(|(op, left, right)| Node::binary(op, left, right)),
            (child.clone(), child.clone()).prop_map(|(base, index)| Node::Index { base, index }),
            child.clone().prop_map(|lvalue| Node::AddressOf { lvalue }),
            child.clone().prop_map(|lvalue| Node::Rvalue { lvalue }),
            child.clone().prop_map(|argument| Node::StackAlloc { argument }),
            child.clone().prop_map(|expression| Node::Sizeof { expression }),
            (option::of(child.clone()), option::of(sequence.clone())).prop_map(
                |(identifier, arguments)| {
                    Node::FunctionCall(FunctionCall {
                        identifier,
                        arguments,
                    })
                }
            ),
            (
                option::of(type_descriptor()),
                option::of(sequence.clone()),
                option::of(sequence.clone()),
            )
                .prop_map(|(ty, arguments, instructions)| {
                    Node::FunctionDefinition(FunctionDefinition {
                        ty,
                        arguments,
                        block: Block::new(None, instructions),
                    })
                }),
        ];

        let statements = prop_oneof![
            sequence.clone().prop_map(Node::Sequence),
            (option::of(sequence.clone()), option::of(sequence.clone()))
                .prop_map(|(declarations, instructions)| {
                    Node::Block(Block::new(declarations, instructions))
                }),
            (
                "[a-z]{1,4}",
                qualifier(),
                option::of(type_descriptor()),
                option::of(inner.clone())
            )
                .prop_map(|(name, qualifier, ty, init)| {
                    Node::declaration(name, qualifier, ty, init)
                }),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Node::assignment(l, r)),
            (child.clone(), child.clone()).prop_map(|(condition, block)| Node::If {
                condition,
                block
            }),
            (child.clone(), child.clone(), child.clone()).prop_map(
                |(condition, then_block, else_block)| Node::IfElse {
                    condition,
                    then_block,
                    else_block,
                }
            ),
            (inner.clone(), inner.clone()).prop_map(|(c, b)| Node::while_loop(c, b)),
            option::of(child.clone()).prop_map(|value| Node::Return { value }),
            sequence.prop_map(|arguments| Node::Print { arguments }),
            child.prop_map(|argument| Node::Evaluation { argument }),
        ];

        prop_oneof![expressions, statements]
    })
}

proptest! {
    #[test]
    fn tags_are_balanced(node in tree()) {
        let output = dump(&node, 0);
        if let Err(problem) = check_nesting(&output) {
            panic!("{problem}\n{output}");
        }
    }

    #[test]
    fn every_node_opens_exactly_one_tag(node in tree()) {
        let output = dump(&node, 0);
        prop_assert_eq!(node_tags(&output).len(), count_node_tags(&node));
    }

    #[test]
    fn dumping_twice_is_identical(node in tree(), level in 0usize..6) {
        prop_assert_eq!(dump(&node, level), dump(&node, level));
    }

    #[test]
    fn initial_level_only_shifts_indentation(node in tree(), shift in 0usize..8) {
        let base = dump(&node, 0);
        let expected: String = base
            .lines()
            .map(|line| format!("{}{line}\n", " ".repeat(shift)))
            .collect();
        prop_assert_eq!(dump(&node, shift), expected);
    }

    #[test]
    fn sequence_keeps_element_order(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let node = Node::sequence(values.iter().copied().map(Node::integer).collect());
        let output = dump(&node, 0);
        let lines: Vec<&str> = output.lines().collect();

        prop_assert_eq!(lines.len(), values.len() + 2);
        prop_assert_eq!(lines[0], format!("<sequence_node size='{}'>", values.len()));
        prop_assert_eq!(lines[lines.len() - 1], "</sequence_node>");
        for (line, value) in lines[1..lines.len() - 1].iter().zip(&values) {
            prop_assert_eq!(*line, format!("  <integer_node>{value}</integer_node>"));
        }
    }

    #[test]
    fn functional_types_never_end_inputs_with_a_comma(ty in type_descriptor()) {
        let name = mml_dump::type_name(Some(&ty));
        prop_assert!(!name.contains(",)"), "{}", name);
    }
}
