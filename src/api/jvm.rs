//! JNI implementation of `com.akfc.training.jni.NativeCalculator`.
//!
//! Failures never throw from here. Factorial answers `-1`, system info
//! answers the fallback text, and array processing answers `null`, leaving any
//! exception the JVM itself raised (e.g. `OutOfMemoryError` from
//! `NewIntArray`) pending for the caller.

use std::ffi::c_void;

use jni::objects::{JIntArray, JObject, ReleaseMode};
use jni::sys::{
    jboolean, jdouble, jint, jintArray, jlong, jsize, jstring, JavaVM, JNI_FALSE, JNI_TRUE,
    JNI_VERSION_1_8,
};
use jni::JNIEnv;
use tracing::warn;

use crate::common::buf::ScratchBuffer;
use crate::common::error::{CalcError, CalcResult};
use crate::sysinfo::UnameProbe;

use super::{calculator, factorial_or_sentinel};

/// Called by the JVM on `System.loadLibrary("nativecalc")`.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    let _ = calculator();
    JNI_VERSION_1_8
}

/// `int add(int a, int b)`
#[no_mangle]
pub extern "system" fn Java_com_akfc_training_jni_NativeCalculator_add<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    a: jint,
    b: jint,
) -> jint {
    calculator().add(a, b)
}

/// `double multiply(double a, double b)`
#[no_mangle]
pub extern "system" fn Java_com_akfc_training_jni_NativeCalculator_multiply<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    a: jdouble,
    b: jdouble,
) -> jdouble {
    calculator().multiply(a, b)
}

/// `long factorial(int n)`, `-1` for negative `n`.
#[no_mangle]
pub extern "system" fn Java_com_akfc_training_jni_NativeCalculator_factorial<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    n: jint,
) -> jlong {
    factorial_or_sentinel(n)
}

/// `boolean isPrime(int number)`
#[no_mangle]
pub extern "system" fn Java_com_akfc_training_jni_NativeCalculator_isPrime<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    number: jint,
) -> jboolean {
    if calculator().is_prime(number) {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}

/// `String getSystemInfo()`
#[no_mangle]
pub extern "system" fn Java_com_akfc_training_jni_NativeCalculator_getSystemInfo<'local>(
    env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    let report = calculator().system_info(&UnameProbe);
    match env.new_string(report) {
        Ok(text) => text.into_raw(),
        Err(err) => {
            warn!(%err, "NewStringUTF failed");
            std::ptr::null_mut()
        }
    }
}

/// `int[] processArray(int[] input)`, `null` when a buffer cannot be obtained.
#[no_mangle]
pub extern "system" fn Java_com_akfc_training_jni_NativeCalculator_processArray<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    input: JIntArray<'local>,
) -> jintArray {
    match square_array(&mut env, &input) {
        Ok(output) => output.into_raw(),
        Err(err) => {
            warn!(code = err.code() as u32, %err, "processArray failed");
            std::ptr::null_mut()
        }
    }
}

fn square_array<'local>(
    env: &mut JNIEnv<'local>,
    input: &JIntArray<'_>,
) -> CalcResult<JIntArray<'local>> {
    // The host's elements are only reachable inside this block; the guard
    // releases them on every exit, including the `?` paths.
    let values = {
        // SAFETY: the array is not otherwise accessed through JNI while the
        // guard is alive, and nothing is written back to it.
        let elements = unsafe { env.get_array_elements(input, ReleaseMode::NoCopyBack)? };
        ScratchBuffer::<jint>::try_copy_from(&elements)?
    };

    let squared = calculator().process_array(values.as_slice())?;
    let len = jsize::try_from(squared.len()).map_err(|_| CalcError::OutOfMemory {
        elements: squared.len(),
    })?;
    let output = env.new_int_array(len)?;
    env.set_int_array_region(&output, 0, &squared)?;
    Ok(output)
}
