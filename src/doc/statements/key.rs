/*!
# `KEY <key>`

## Purpose
Tap a key.

## Remarks
The key is held for 50 milliseconds. Anything after the key name is
ignored. See `KEYPRESS` to choose the hold time.

## Example
```text
KEY ENTER
```

*/
