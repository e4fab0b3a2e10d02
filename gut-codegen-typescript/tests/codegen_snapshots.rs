//! Tests for interface generation from described Rust types.
//!
//! Most cases compare whitespace-stripped output so the expected
//! declarations can be written naturally; a few exact snapshots pin the
//! layout. Run `cargo insta review` to update snapshots when making
//! intentional changes.

use std::{collections::HashMap, marker::PhantomData, time::Duration};

use gut_codegen_typescript::{Error, NamingOptions, convert, convert_type, convert_with_registry};
use gut_ir::{AnyValue, DateTime, Describe, Field, StructType, StructuralType, Uuid};

fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[track_caller]
fn assert_declares(generated: &str, expected: &str) {
    assert_eq!(
        strip_spaces(generated),
        strip_spaces(expected),
        "\ngenerated:\n{}",
        generated
    );
}

fn options() -> NamingOptions {
    NamingOptions::new()
}

struct SimpleStruct;

impl Describe for SimpleStruct {
    fn describe() -> StructuralType {
        StructType::new("SimpleStruct")
            .field(Field::of::<String>("MyString"))
            .into()
    }
}

struct SimpleStructWithTimeFields;

impl Describe for SimpleStructWithTimeFields {
    fn describe() -> StructuralType {
        StructType::new("SimpleStructWithTimeFields")
            .field(Field::of::<String>("MyString"))
            .field(Field::of::<DateTime>("CreatedAt"))
            .field(Field::of::<DateTime>("UpdatedAtOptional").tag("updated_at,omitempty"))
            .field(Field::of::<DateTime>("DeletedAt").tag("deleted_at"))
            .into()
    }
}

struct SimpleStructWithJsonTags;

impl Describe for SimpleStructWithJsonTags {
    fn describe() -> StructuralType {
        StructType::new("SimpleStructWithJsonTags")
            .field(Field::of::<String>("MyString").tag("my_str"))
            .field(Field::of::<isize>("MyInt").tag("my_int"))
            .into()
    }
}

struct StructWithMultipleTypes;

impl Describe for StructWithMultipleTypes {
    fn describe() -> StructuralType {
        StructType::new("StructWithMultipleTypes")
            .field(Field::of::<String>("MyString").tag("my_str"))
            .field(Field::of::<isize>("MyInt").tag("my_int"))
            .field(Field::of::<i32>("MyInt32").tag("my_int_32"))
            .field(Field::of::<Vec<String>>("ArrayOfStrings").tag(""))
            .field(Field::of::<Vec<isize>>("OptionalArrayOfInts").tag("opt_arr_of_ints,omitempty"))
            .field(Field::of::<AnyValue>("MyInterface"))
            .into()
    }
}

struct ReferenceStruct;

impl Describe for ReferenceStruct {
    fn describe() -> StructuralType {
        StructType::new("ReferenceStruct")
            .field(Field::of::<f64>("MyFloat").tag("my_float"))
            .field(Field::of::<isize>("Timestamp").tag("timestamp"))
            .into()
    }
}

struct StructWithReference;

impl Describe for StructWithReference {
    fn describe() -> StructuralType {
        StructType::new("StructWithReference")
            .field(Field::of::<String>("MyString").tag("my_str"))
            .field(Field::of::<isize>("MyInt"))
            .field(Field::of::<ReferenceStruct>("Reference").tag("ref"))
            .field(Field::of::<ReferenceStruct>("OptionalReference").tag("opt_ref,omitempty"))
            .into()
    }
}

struct StructWithArrayOfReferences;

impl Describe for StructWithArrayOfReferences {
    fn describe() -> StructuralType {
        StructType::new("StructWithArrayOfReferences")
            .field(Field::of::<Vec<ReferenceStruct>>("ArrayOfRefences").tag("arr_of_ref"))
            .into()
    }
}

struct StructWithUnspecifiedStructName;

impl Describe for StructWithUnspecifiedStructName {
    fn describe() -> StructuralType {
        StructType::new("StructWithUnspecifiedStructName")
            .field(Field::of::<String>("SomeValue"))
            .field(Field::of::<ReferenceStruct>("ReferenceStruct"))
            .into()
    }
}

struct StructWithTimeDurationField;

impl Describe for StructWithTimeDurationField {
    fn describe() -> StructuralType {
        StructType::new("StructWithTimeDurationField")
            .field(Field::of::<String>("SomeValue"))
            .field(Field::of::<Duration>("CurrentTime"))
            .into()
    }
}

struct StructWithMaps;

impl Describe for StructWithMaps {
    fn describe() -> StructuralType {
        StructType::new("StructWithMaps")
            .field(Field::of::<String>("MyStr"))
            .field(Field::of::<i64>("MyOptInt").tag("my_opt_int,omitempty"))
            .field(Field::of::<HashMap<String, HashMap<isize, String>>>("Ex1"))
            .field(Field::of::<HashMap<String, HashMap<String, String>>>("Ex2").tag("ex_2"))
            .field(Field::of::<HashMap<isize, HashMap<String, String>>>("Ex3").tag("ex_3,omitempty"))
            .field(Field::of::<HashMap<String, HashMap<f32, AnyValue>>>("Ex4").tag("ex_4,omitempty"))
            .into()
    }
}

/// A named collection of anonymous rows; the element carries the name.
struct Employees;

impl Describe for Employees {
    fn describe() -> StructuralType {
        StructuralType::slice(
            StructType::new("Employees")
                .field(Field::of::<Uuid>("ID").tag("user_id"))
                .field(Field::of::<String>("Username"))
                .field(Field::of::<String>("OptionalSurename").tag("opt_surename,omitempty"))
                .field(Field::of::<AnyValue>("RandomInterface"))
                .field(Field::of::<AnyValue>("OptionalInterface").tag("opt_interface,omitempty")),
        )
    }
}

const EMPLOYEE_MEMBERS: &str = "
    user_id: UuidType
    Username: string
    opt_surename?: string
    RandomInterface: any
    opt_interface?: any
";

struct MyEmbeddedStruct;

impl Describe for MyEmbeddedStruct {
    fn describe() -> StructuralType {
        StructType::new("MyEmbeddedStruct")
            .field(Field::of::<DateTime>("StartTime").tag("start_time"))
            .field(Field::of::<DateTime>("EndTime").tag("end_time"))
            .field(Field::of::<DateTime>("UpdatedAt").tag("updated_at"))
            .into()
    }
}

struct NotEmbeddedStruct;

impl Describe for NotEmbeddedStruct {
    fn describe() -> StructuralType {
        StructType::new("NotEmbeddedStruct")
            .field(Field::of::<String>("SomeRandomField").tag("some_random_field"))
            .field(Field::of::<HashMap<String, AnyValue>>("SomeMoreStuff"))
            .into()
    }
}

struct StructWhichHasEmbeddedStructs;

impl Describe for StructWhichHasEmbeddedStructs {
    fn describe() -> StructuralType {
        StructType::new("StructWhichHasEmbeddedStructs")
            .field(Field::of::<MyEmbeddedStruct>("MyEmbeddedStruct").tag(",inline"))
            .into()
    }
}

struct StructWithInlinedFields;

impl Describe for StructWithInlinedFields {
    fn describe() -> StructuralType {
        StructType::new("StructWithInlinedFields")
            .field(Field::of::<MyEmbeddedStruct>("MyEmbeddedStruct").tag(",inline"))
            .field(Field::of::<NotEmbeddedStruct>("NotEmbeddedStruct").tag("not_embedded_struct"))
            .field(Field::of::<isize>("CustomField"))
            .field(
                Field::of::<StructWhichHasEmbeddedStructs>("StructWhichHasEmbeddedStructs")
                    .tag("this_should_hold_start_end_and_updated_at"),
            )
            .into()
    }
}

/// A generic struct; every instantiation describes itself under its own name.
struct StructWithGeneric<T>(PhantomData<T>);

impl<T: Describe> StructWithGeneric<T> {
    fn describe_as(name: &str) -> StructuralType {
        StructType::new(name)
            .field(Field::of::<String>("SomeField").tag("some_field"))
            .field(Field::of::<T>("GenericType").tag("areas"))
            .into()
    }
}

struct GenericWithAnObject;

impl Describe for GenericWithAnObject {
    fn describe() -> StructuralType {
        StructWithGeneric::<HashMap<String, AnyValue>>::describe_as("GenericWithAnObject")
    }
}

struct GenericWithAnArray;

impl Describe for GenericWithAnArray {
    fn describe() -> StructuralType {
        StructWithGeneric::<Vec<String>>::describe_as("GenericWithAnArray")
    }
}

struct GenericInsideGeneric;

impl Describe for GenericInsideGeneric {
    fn describe() -> StructuralType {
        StructWithGeneric::<GenericWithAnObject>::describe_as("GenericInsideGeneric")
    }
}

struct GenericInsideGenericInsideGeneric;

impl Describe for GenericInsideGenericInsideGeneric {
    fn describe() -> StructuralType {
        StructWithGeneric::<GenericInsideGeneric>::describe_as("GenericInsideGenericInsideGeneric")
    }
}

// =============================================================================
// Structs without naming options
// =============================================================================

#[test]
fn test_simple_struct() {
    insta::assert_snapshot!(convert_type::<SimpleStruct>(None).unwrap(), @r"
    export interface SimpleStruct {
      MyString: string
    }
    ");
}

#[test]
fn test_json_tags_rename_fields() {
    assert_declares(
        &convert_type::<SimpleStructWithJsonTags>(None).unwrap(),
        "export interface SimpleStructWithJsonTags {
            my_str: string
            my_int: number
        }",
    );
}

#[test]
fn test_time_fields() {
    assert_declares(
        &convert_type::<SimpleStructWithTimeFields>(None).unwrap(),
        "export interface SimpleStructWithTimeFields {
            MyString: string
            CreatedAt: DateType
            updated_at?: DateType
            deleted_at: DateType
        }",
    );
}

#[test]
fn test_duration_field() {
    assert_declares(
        &convert_type::<StructWithTimeDurationField>(None).unwrap(),
        "export interface StructWithTimeDurationField {
            SomeValue: string
            CurrentTime: BigIntType
        }",
    );
}

#[test]
fn test_multiple_types() {
    assert_declares(
        &convert_type::<StructWithMultipleTypes>(None).unwrap(),
        "export interface StructWithMultipleTypes {
            my_str: string
            my_int: number
            my_int_32: number
            ArrayOfStrings: string[]
            opt_arr_of_ints?: number[]
            MyInterface: any
        }",
    );
}

#[test]
fn test_struct_references_render_inline() {
    insta::assert_snapshot!(convert_type::<StructWithReference>(None).unwrap(), @r"
    export interface StructWithReference {
      my_str: string
      MyInt: number
      ref: {
        my_float: number
        timestamp: number
      }
      opt_ref?: {
        my_float: number
        timestamp: number
      }
    }
    ");
}

#[test]
fn test_array_of_references() {
    assert_declares(
        &convert_type::<StructWithArrayOfReferences>(None).unwrap(),
        "export interface StructWithArrayOfReferences {
            arr_of_ref: {
                my_float: number
                timestamp: number
            }[]
        }",
    );
}

#[test]
fn test_untagged_embedded_struct_is_a_property() {
    assert_declares(
        &convert_type::<StructWithUnspecifiedStructName>(None).unwrap(),
        "export interface StructWithUnspecifiedStructName {
            SomeValue: string
            ReferenceStruct: {
                my_float: number
                timestamp: number
            }
        }",
    );
}

#[test]
fn test_maps() {
    assert_declares(
        &convert_type::<StructWithMaps>(None).unwrap(),
        "export interface StructWithMaps {
            MyStr: string
            my_opt_int?: BigIntType
            Ex1: { [key: string]: { [key: number]: string } }
            ex_2: { [key: string]: { [key: string]: string } }
            ex_3?: { [key: number]: { [key: string]: string } }
            ex_4?: { [key: string]: { [key: number]: any } }
        }",
    );
}

#[test]
fn test_collection_declares_array_alias() {
    insta::assert_snapshot!(convert_type::<Employees>(None).unwrap(), @r"
    export type EmployeesArray = Employees[]

    export interface Employees {
      user_id: UuidType
      Username: string
      opt_surename?: string
      RandomInterface: any
      opt_interface?: any
    }
    ");
}

// =============================================================================
// Structs with naming options
// =============================================================================

#[test]
fn test_default_options() {
    assert_declares(
        &convert_type::<SimpleStruct>(Some(&options())).unwrap(),
        "export interface SimpleStruct { MyString: string }",
    );
}

#[test]
fn test_custom_name() {
    assert_declares(
        &convert_type::<SimpleStruct>(Some(&options().name("_my_custom_name"))).unwrap(),
        "export interface _my_custom_name { MyString: string }",
    );
}

#[test]
fn test_custom_name_with_array() {
    assert_declares(
        &convert_type::<SimpleStruct>(Some(&options().name("SingleRow").with_array())).unwrap(),
        "export type SingleRowArray = SingleRow[]

        export interface SingleRow {
            MyString: string
        }",
    );
}

#[test]
fn test_custom_array_type_name() {
    let options = options()
        .name("SingleRow")
        .with_array()
        .array_type_name("MyCustomNameForExportedArrayOfSimpleStructs");
    assert_declares(
        &convert_type::<SimpleStruct>(Some(&options)).unwrap(),
        "export type MyCustomNameForExportedArrayOfSimpleStructs = SingleRow[]

        export interface SingleRow {
            MyString: string
        }",
    );
}

#[test]
fn test_collection_with_custom_name() {
    assert_declares(
        &convert_type::<Employees>(Some(&options().name("EmployeeInterface"))).unwrap(),
        &format!(
            "export type EmployeeInterfaceArray = EmployeeInterface[]
            export interface EmployeeInterface {{ {} }}",
            EMPLOYEE_MEMBERS
        ),
    );
}

#[test]
fn test_collection_ignores_disabled_array_flag() {
    let options = NamingOptions {
        name: Some("EmployeeInterface".into()),
        is_array: false,
        array_type_name: None,
    };
    assert_declares(
        &convert_type::<Employees>(Some(&options)).unwrap(),
        &format!(
            "export type EmployeeInterfaceArray = EmployeeInterface[]
            export interface EmployeeInterface {{ {} }}",
            EMPLOYEE_MEMBERS
        ),
    );
}

#[test]
fn test_collection_with_custom_array_name() {
    let options = options()
        .name("EmployeeInterface")
        .array_type_name("MyArrayOfEmployees");
    assert_declares(
        &convert_type::<Employees>(Some(&options)).unwrap(),
        &format!(
            "export type MyArrayOfEmployees = EmployeeInterface[]
            export interface EmployeeInterface {{ {} }}",
            EMPLOYEE_MEMBERS
        ),
    );
}

// =============================================================================
// Inline fields and generics
// =============================================================================

#[test]
fn test_inlined_fields() {
    insta::assert_snapshot!(convert_type::<StructWithInlinedFields>(None).unwrap(), @r"
    export interface StructWithInlinedFields {
      start_time: DateType
      end_time: DateType
      updated_at: DateType
      not_embedded_struct: {
        some_random_field: string
        SomeMoreStuff: {[key: string]: any}
      }
      CustomField: number
      this_should_hold_start_end_and_updated_at: {
        start_time: DateType
        end_time: DateType
        updated_at: DateType
      }
    }
    ");
}

#[test]
fn test_generic_with_an_object() {
    assert_declares(
        &convert_type::<GenericWithAnObject>(None).unwrap(),
        "export interface GenericWithAnObject {
            some_field: string
            areas: { [key: string]: any }
        }",
    );
}

#[test]
fn test_generic_with_an_array() {
    assert_declares(
        &convert_type::<GenericWithAnArray>(None).unwrap(),
        "export interface GenericWithAnArray {
            some_field: string
            areas: string[]
        }",
    );
}

#[test]
fn test_generic_inside_generic() {
    assert_declares(
        &convert_type::<GenericInsideGeneric>(None).unwrap(),
        "export interface GenericInsideGeneric {
            some_field: string
            areas: {
                some_field: string
                areas: { [key: string]: any }
            }
        }",
    );
}

#[test]
fn test_generic_three_levels_deep() {
    insta::assert_snapshot!(convert_type::<GenericInsideGenericInsideGeneric>(None).unwrap(), @r"
    export interface GenericInsideGenericInsideGeneric {
      some_field: string
      areas: {
        some_field: string
        areas: {
          some_field: string
          areas: {[key: string]: any}
        }
      }
    }
    ");
}

// =============================================================================
// Registry and errors
// =============================================================================

#[test]
fn test_registry_records_named_types_in_order() {
    let (_, registry) = convert_with_registry(&Employees::describe(), None).unwrap();
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["UUID"]);

    let ty: StructuralType = StructType::new("Job")
        .field(Field::of::<Duration>("Timeout"))
        .field(Field::of::<Vec<Uuid>>("Owners"))
        .field(Field::of::<Duration>("Retry"))
        .into();
    let (_, registry) = convert_with_registry(&ty, None).unwrap();
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Duration", "UUID"]);
}

#[test]
fn test_each_conversion_starts_a_fresh_registry() {
    let first = convert_with_registry(&Employees::describe(), None).unwrap().1;
    let second = convert_with_registry(&SimpleStruct::describe(), None).unwrap().1;
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn test_reserved_and_invalid_names_are_fatal() {
    let err = convert_type::<SimpleStruct>(Some(&options().name("interface"))).unwrap_err();
    assert!(matches!(err, Error::ReservedName { .. }));
    assert!(err.is_fatal());

    let err = convert_type::<SimpleStruct>(Some(&options().name("Simple Struct"))).unwrap_err();
    assert!(matches!(err, Error::InvalidName { .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_anonymous_collection_without_name_is_fatal() {
    let ty = StructuralType::slice(StructType::anonymous().field(Field::of::<String>("A")));
    let err = convert(&ty, Some(&options())).unwrap_err();
    assert!(matches!(err, Error::EmptyArrayName));
    assert!(err.is_fatal());
}

#[test]
fn test_non_struct_input_is_fatal() {
    let err = convert_type::<Vec<String>>(None).unwrap_err();
    assert!(matches!(err, Error::NotAStruct { ref ty } if ty == "[]string"));
}
