pub mod tensor_test;
