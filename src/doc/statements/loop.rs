/*!
# `LOOP <count>`

## Purpose
Used with `ENDLOOP` to repeat the statements between them.

## Remarks
The count must be a whole number that is not negative.
The statements always run at least once, so `LOOP 0` and `LOOP 1`
behave the same. Loops may be nested to any depth.
A `LOOP` that never meets an `ENDLOOP` is reported and its statements
run once.

## Example
```text
LOOP 2
  LOOP 3
    KEY A
  ENDLOOP
  KEY ENTER
ENDLOOP
```
Sends `A A A ENTER A A A ENTER`.

*/
